use fractal_engine::{ColourStrategy, DemoController, Depth, PaletteScheme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let depth = match std::env::args().nth(1) {
        Some(arg) => Depth::new(arg.parse::<i64>()?)?,
        None => Depth::new(4)?,
    };
    let scheme = match std::env::args().nth(2) {
        Some(arg) => arg.parse::<PaletteScheme>()?,
        None => PaletteScheme::default(),
    };

    let mut controller = DemoController::new(depth, scheme, ColourStrategy::ContinuousGradient);

    controller.generate()?;
    controller.summarise()?;

    Ok(())
}
