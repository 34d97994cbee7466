use osbforge::{ChainBuilder as _, Easing, Effect, EventsOpts, LineEnding, Storyboard};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let script = |board: &mut Storyboard| -> osbforge::OsbResult<()> {
        let mut pulse = Effect::new();
        pulse
            .fade_in(100, Easing::Linear)
            .fade_out(100, Easing::Linear);

        board
            .sprite("sb/asdf.png")
            .apply_effect(&pulse, 10)
            .fade_out(500, Easing::Out)
            .sleep(1500)
            .apply_effect(&pulse, 1)
            .fade_out(200, Easing::Linear)
            .start_loop(2)
            .fade_in(50, Easing::Linear)
            .fade_out(50, Easing::Linear)
            .end_loop();

        board
            .sprite("sb/star.png")
            .start_batch()
            .move_to(800, 100.0, 100.0, Easing::InOutSine)
            .resize(600, 0.5, Easing::OutBack)
            .end_batch()
            .fade_out(200, Easing::Linear);
        Ok(())
    };

    let board = osbforge::evaluate(&script)?;
    let text = osbforge::render_events(
        &board,
        EventsOpts {
            line_ending: LineEnding::Lf,
        },
    );
    print!("{text}");
    Ok(())
}
