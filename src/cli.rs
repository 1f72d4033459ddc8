use clap::Parser;
use loopmat::{LoopOrder, parse_dimension};

#[derive(Parser, Debug)]
#[command(
    name = "loopmat",
    version = env!("CARGO_PKG_VERSION"),
    allow_negative_numbers = true,
    about = "Time N×N matrix multiplication in each of the six loop orders."
)]
pub struct Cli {
    /// Matrix dimension N (matrices are N×N)
    #[arg(value_name = "N", value_parser = parse_dimension)]
    pub n: usize,

    /// Loop order to run; repeat to run several. Defaults to all six
    #[arg(short = 'o', long = "order", value_enum, value_name = "ORDER")]
    pub orders: Vec<LoopOrder>,

    /// Timed runs per loop order (after one warmup run)
    #[arg(
        short = 'i',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: u32,

    /// Check every product against the i-j-k result and the textbook definition
    #[arg(long)]
    pub verify: bool,

    /// Also time elementwise addition of the two operands
    #[arg(long)]
    pub add: bool,

    /// Print the product matrix (meant for small N)
    #[arg(long)]
    pub print: bool,

    // verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Loop orders to run, in the order given on the command line.
    pub fn selected_orders(&self) -> Vec<LoopOrder> {
        if self.orders.is_empty() {
            return LoopOrder::ALL.to_vec();
        }
        let mut seen = Vec::with_capacity(self.orders.len());
        for &o in &self.orders {
            if !seen.contains(&o) {
                seen.push(o);
            }
        }
        seen
    }
}
