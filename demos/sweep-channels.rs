#![deny(clippy::all)]

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;

use ltc2309::{Config, Ltc2309Error, PolarityMode, Reading, Readout, SamplingSession};

/// Converts every input of an LTC2309 once and prints the voltages
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// i2c character device
    #[arg(long, default_value = ltc2309::DEFAULT_BUS_PATH)]
    bus: PathBuf,

    /// 7-bit slave address, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0x28", value_parser = parse_address)]
    address: u16,

    /// reference voltage in volts
    #[arg(long, default_value_t = ltc2309::DEFAULT_VREF)]
    vref: f32,

    /// convert as signed codes around vref/2
    #[arg(long)]
    bipolar: bool,

    /// conversions per channel
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// report the mean of the conversions instead of the last one
    #[arg(long)]
    average: bool,

    /// keep sweeping after a channel fails
    #[arg(long)]
    keep_going: bool,
}

fn parse_address(value: &str) -> Result<u16, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|err| format!("invalid address {:?}: {}", value, err))
}

fn run(args: Args) -> Result<(), Ltc2309Error> {
    let config = Config {
        bus_path: args.bus,
        address: args.address,
        vref: args.vref,
        readout: if args.average { Readout::Average } else { Readout::Last },
        ..Config::default()
    };
    let mode = if args.bipolar { PolarityMode::Bipolar } else { PolarityMode::Unipolar };

    let mut session = SamplingSession::open(config)?;

    let print = |reading: Reading| println!("Channel [{}] = {:.6} Volts", reading.channel, reading.voltage);

    if !args.keep_going {
        return session.sweep(mode, args.count, print);
    }

    let failures = session.sweep_partial(mode, args.count, print);
    for (channel, err) in &failures {
        println!("Channel [{}] = error: {}", channel, err);
    }
    failures.into_iter().next().map_or(Ok(()), |(_, err)| Err(err))
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        error!("{}", err);
        process::exit(1);
    }
}
