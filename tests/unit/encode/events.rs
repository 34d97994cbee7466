use super::*;
use crate::{animation::ease::Easing, storyboard::sprite::Sprite};

fn two_sprite_board() -> Storyboard {
    let mut board = Storyboard::new();
    board
        .sprite("a.png")
        .fade_in(100, Easing::Linear)
        .fade_out(100, Easing::Linear);
    board.sprite_with(Sprite::builder("b.png").position(0.0, 0.0));
    board
}

#[test]
fn document_layout_with_lf() {
    let text = render_events(
        &two_sprite_board(),
        EventsOpts {
            line_ending: LineEnding::Lf,
        },
    );
    assert_eq!(
        text,
        "[Events]\n\
         Sprite,0,0,\"a.png\",320,240\n\
         _F,0,0,100,0,1\n\
         _F,0,100,200,1,0\n\
         \n\
         Sprite,0,0,\"b.png\",0,0\n\
         \n"
    );
}

#[test]
fn default_line_ending_is_crlf() {
    let text = render_events(&two_sprite_board(), EventsOpts::default());
    assert!(text.starts_with("[Events]\r\nSprite,0,0,\"a.png\",320,240\r\n"));
    assert!(text.ends_with("Sprite,0,0,\"b.png\",0,0\r\n\r\n"));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

#[test]
fn empty_board_renders_only_the_section() {
    let text = render_events(
        &Storyboard::new(),
        EventsOpts {
            line_ending: LineEnding::Lf,
        },
    );
    assert_eq!(text, "[Events]\n\n");
}

#[test]
fn rendering_is_repeatable() {
    let board = two_sprite_board();
    let opts = EventsOpts::default();
    assert_eq!(render_events(&board, opts), render_events(&board, opts));
}

#[test]
fn write_document_creates_parents_and_leaves_no_temp() {
    let dir = std::env::temp_dir().join(format!(
        "osbforge_write_document_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let out = dir.join("nested").join("map.osb");

    write_document(&out, "[Events]\n\n").unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[Events]\n\n");
    assert!(!temp_path(&out).exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn temp_path_is_unique_per_process() {
    let out = std::path::Path::new("maps").join("map.osb");
    let tmp = temp_path(&out);
    assert_eq!(tmp.parent(), out.parent());
    assert_eq!(
        tmp.file_name().unwrap().to_string_lossy(),
        format!("map.osb.{}.tmp", std::process::id())
    );
}
