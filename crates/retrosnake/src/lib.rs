use anyhow::{Context, Result};
use retrosnake_game::{FoodPlacement, GameConfig, GameState, SnakeApp, TICK_PERIOD};
use retrosnake_sdl2::App;
use retrosnake_sdl2::{SdlContext, SdlInitInfo};

/// Launch options taken from the command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Seed for food placement; random when absent.
    pub seed: Option<u64>,
    pub food_placement: FoodPlacement,
}

impl Options {
    /// Parses `[seed] [food-placement]`.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut options = Options::default();
        if let Some(seed) = args.next() {
            options.seed = Some(
                seed.parse()
                    .with_context(|| format!("invalid seed '{}'", seed))?,
            );
        }
        if let Some(placement) = args.next() {
            options.food_placement = placement.parse()?;
        }
        Ok(options)
    }
}

pub fn build_app(options: &Options) -> Result<SnakeApp> {
    let config = GameConfig::builder()
        .food_placement(options.food_placement)
        .build();
    let state = match options.seed {
        Some(seed) => GameState::with_seed(config, seed)?,
        None => GameState::new(config)?,
    };
    Ok(SnakeApp::new(state))
}

pub fn run(options: &Options) -> Result<()> {
    let app = build_app(options)?;
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .frame_period(TICK_PERIOD)
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
