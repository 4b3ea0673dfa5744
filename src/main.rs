use category_wheel::app::WheelApp;
use category_wheel::cli::Opt;
use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

fn main() {
    let opt: Opt = Opt::from_args();

    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(message) => {
            error!("{}", message);
            std::process::exit(1);
        }
    };

    let app = WheelApp::new(config);

    if let Err(error) = app.run() {
        error!("{}", error);
        std::process::exit(1);
    }
}
