#![no_main]

use bitgrain::fuzz::round_trip::{harness, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| { harness(data) });
