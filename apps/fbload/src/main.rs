use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use display_bus::{MockPlatformBus, MockSpiBus};
use display_registry::{
    parse_gpio_specs, Catalog, ColorOrder, CustomGeometry, DiagnosticsReporter, GpioBinding,
    LoadOutcome, LoadRequest, Overrides, RegistrationEngine,
};

/// Exit code for the "list" pseudo-request: the load was canceled on
/// purpose, not failed.
const EXIT_CANCELED: u8 = 125;

#[derive(Parser, Debug)]
#[command(
    name = "fbload",
    version,
    about = "Register a display device from the built-in catalog"
)]
struct Cli {
    /// Device name (required). "list" prints all supported devices.
    #[arg(long)]
    name: String,

    /// Rotate display: 0=normal, 1=clockwise, 2=upside down, 3=counterclockwise
    #[arg(long, default_value_t = 0)]
    rotate: u32,

    /// SPI bus number
    #[arg(long, default_value_t = 0)]
    busnum: u32,

    /// SPI chip select
    #[arg(long, default_value_t = 0)]
    cs: u32,

    /// SPI speed in Hz (overrides device default); with --custom, selects SPI
    #[arg(long, default_value_t = 0)]
    speed: u32,

    /// SPI mode (overrides device default); -1 = unset
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    mode: i64,

    /// Pin bindings, comma separated "name:number" pairs (replace defaults
    /// wholesale, so all pins must be given)
    #[arg(long, value_delimiter = ',')]
    gpios: Vec<String>,

    /// Frames per second (overrides driver default)
    #[arg(long, default_value_t = 0)]
    fps: u32,

    /// Gamma curve string, driver specific
    #[arg(long)]
    gamma: Option<String>,

    /// Transmit buffer length (overrides driver default)
    #[arg(long, default_value_t = 0)]
    txbuflen: u32,

    /// Color order: 1=BGR, 0=RGB, -1=driver default
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    bgr: i8,

    /// Start byte used by some SPI displays
    #[arg(long, default_value_t = 0)]
    startbyte: u32,

    /// Register a custom device; --speed decides SPI vs platform transport
    #[arg(long)]
    custom: bool,

    /// Display width (custom only)
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Display height (custom only)
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Display bus width (custom only)
    #[arg(long, default_value_t = 0)]
    buswidth: u32,

    /// Init sequence, comma separated integers (custom only)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    init: Vec<i32>,

    /// Debug bitmask forwarded to the driver
    #[arg(long, default_value_t = 0)]
    debug: u64,

    /// 0 silent, >0 show gpios, >1 show devices, >2 show devices before
    #[arg(long, default_value_t = 3)]
    verbose: u32,

    /// Print the catalog as JSON in list mode
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let request = build_request(cli)?;
    let catalog = Catalog::builtin();
    let mut spi = MockSpiBus::new();
    let mut platform = MockPlatformBus::new();
    let reporter = DiagnosticsReporter::new(cli.verbose);

    reporter.before_load(&spi, &platform);

    let outcome = {
        let mut engine = RegistrationEngine::new(&mut spi, &mut platform);
        engine.load(&catalog, &request)?
    };

    match outcome {
        LoadOutcome::Listed(names) => {
            if cli.json {
                let dump = serde_json::to_string_pretty(catalog.entries())
                    .context("serializing catalog")?;
                println!("{dump}");
            } else {
                println!("Supported displays:");
                for name in names {
                    println!("    {name}");
                }
            }
            Ok(ExitCode::from(EXIT_CANCELED))
        }
        LoadOutcome::Registered { handle, descriptor } => {
            reporter.gpios(&descriptor.name, &descriptor.config.gpios);
            reporter.after_load(&spi, &platform);
            info!("'{}' registered, unloading", descriptor.name);
            let mut engine = RegistrationEngine::new(&mut spi, &mut platform);
            engine.teardown(handle);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_request(cli: &Cli) -> Result<LoadRequest> {
    let gpios: Option<Vec<GpioBinding>> = if cli.gpios.is_empty() {
        None
    } else {
        Some(parse_gpio_specs(&cli.gpios)?)
    };
    Ok(LoadRequest {
        name: cli.name.clone(),
        busnum: cli.busnum,
        cs: cli.cs,
        custom: cli.custom,
        overrides: Overrides {
            rotate: cli.rotate,
            speed: cli.speed,
            mode: u32::try_from(cli.mode).ok(),
            gpios,
            fps: cli.fps,
            gamma: cli.gamma.clone(),
            txbuflen: cli.txbuflen,
            color_order: match cli.bgr {
                0 => Some(ColorOrder::Rgb),
                1 => Some(ColorOrder::Bgr),
                _ => None,
            },
            startbyte: cli.startbyte,
            debug: cli.debug,
        },
        geometry: CustomGeometry {
            width: cli.width,
            height: cli.height,
            buswidth: cli.buswidth,
            init: cli.init.clone(),
        },
    })
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
