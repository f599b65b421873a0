//! Clap button demo
//!
//! Drives a clap button with scripted pointer input, logs every state
//! change and prints the final markup.

use anyhow::Context as _;
use clapper::prelude::*;
use std::path::PathBuf;

const USAGE: &str = r#"
Usage

    clap_button [--config <path>] [--clicks <n>]

Options

    --config <path>     JSON configuration file (default: built-in defaults)
    --clicks <n>        Number of clicks to simulate (default: 3)
    --help              Print help
"#;

struct Options {
    config: Option<PathBuf>,
    clicks: u32,
}

fn parse_args() -> anyhow::Result<Option<Options>> {
    use lexopt::prelude::*;

    let mut parser = lexopt::Parser::from_env();
    let mut config = None;
    let mut clicks = 3;

    while let Some(arg) = parser.next()? {
        match arg {
            Long("config") => {
                config = Some(PathBuf::from(parser.value()?));
            }
            Long("clicks") => {
                clicks = parser.value()?.parse()?;
            }
            Long("help") | Short('h') => {
                return Ok(None);
            }
            _ => return Err(anyhow::anyhow!(arg.unexpected())),
        }
    }

    Ok(Some(Options { config, clicks }))
}

fn click(button: &mut ClapButton) {
    let bounds = button.bounds();
    let (x, y) = (bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);

    button.handle_event(&Event::MouseEnter);
    button.handle_event(&Event::MouseDown(MouseEvent::left(x, y)));
    button.handle_event(&Event::MouseUp(MouseEvent::left(x, y)));
    button.update(1.0);
    button.handle_event(&Event::MouseExit);
    button.update(1.0);
}

fn main() -> anyhow::Result<()> {
    let Some(options) = parse_args()? else {
        println!("{}", USAGE.trim());
        return Ok(());
    };

    let config = match &options.config {
        Some(path) => ClapperConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ClapperConfig::default(),
    };
    clapper::init(&config)?;

    let mut button = ClapButton::from_config(&config.widget)?;
    button.layout(Rect::new(0.0, 0.0, config.widget.size * 2.0, config.widget.size * 2.0));
    button.on_change(|state| tracing::info!(%state, "state changed"));

    for _ in 0..options.clicks {
        click(&mut button);
    }

    println!("{}", button.state());
    println!("{}", button.render());
    Ok(())
}
