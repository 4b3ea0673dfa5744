use crate::category::{CategoryConfig, CategoryTable};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn load_table(s: &str) -> Result<CategoryTable, String> {
    let path = PathBuf::from(s);
    let file = File::open(path).map_err(|e| format!("Failed to open category file: {}", e))?;
    let reader = BufReader::new(file);
    let configs: Vec<CategoryConfig> = serde_json::from_reader(reader)
        .map_err(|e| format!("Failed to parse category file: {}", e))?;

    CategoryTable::new(configs).map_err(|e| e.to_string())
}

#[derive(Debug)]
pub struct AppConfig {
    pub table: CategoryTable,
    pub seed: Option<u64>,
    pub spin_delay: Duration,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Category Wheel",
    about = "Spin a category wheel and draw up to six random word tiles"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str=load_table),
        help = "Category table as a JSON file (built-in demo table when omitted)"
    )]
    input: Option<CategoryTable>,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        parse(try_from_str),
        long,
        default_value = "2.5",
        help = "Spin delay in seconds"
    )]
    spin_delay: f32,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, String> {
        if !(0.0..=30.0).contains(&self.spin_delay) {
            return Err(format!(
                "Spin delay must be between 0 and 30 seconds, got {}",
                self.spin_delay
            ));
        }

        Ok(AppConfig {
            table: self.input.unwrap_or_else(CategoryTable::demo),
            seed: self.seed,
            spin_delay: Duration::from_secs_f32(self.spin_delay),
        })
    }
}
