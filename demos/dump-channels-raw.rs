#![deny(clippy::all)]

use std::process;

use ltc2309::{Channel, Config, PolarityMode, SamplingSession};

/// outputs the raw adc codes of all channels
fn main() {
    env_logger::init();

    let mut ltc2309 = match SamplingSession::open(Config::default()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    for channel in Channel::VALUES.iter() {
        match ltc2309.read_code(channel.index(), PolarityMode::Unipolar) {
            Ok(code) => println!("channel #{}: {}", channel.index(), code),
            Err(err) => {
                eprintln!("channel #{}: {}", channel.index(), err);
                process::exit(1);
            }
        }
    }
}
