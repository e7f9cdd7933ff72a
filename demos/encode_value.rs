use floatx::{bitfield, double_to_floatx, FloatxFormat};
use itertools::Itertools;
use std::time::Instant;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "encode_value",
    about = "Encodes doubles into a floating-point layout with chosen bit widths"
)]
struct Opt {
    #[structopt(short = "t", long, default_value = "32")]
    tot_bits: u32,

    #[structopt(short = "e", long, default_value = "8")]
    exp_bits: u32,

    values: Vec<f64>,
}

fn get_and_check_options() -> Opt {
    let opt = Opt::from_args();

    assert!(opt.tot_bits >= 3 && opt.tot_bits <= 64);
    assert!(opt.exp_bits >= 1 && opt.exp_bits + 2 <= opt.tot_bits);
    assert!(!opt.values.is_empty());

    opt
}

fn split_fields(format: FloatxFormat, pattern: u64) -> String {
    format!(
        "{}|{:0width_e$b}|{:0width_f$b}",
        bitfield::get_bit(format.tot_bits() - 1, pattern),
        bitfield::get_bit_field(format.frac_bits(), format.exp_bits(), pattern),
        bitfield::get_bit_field(0, format.frac_bits(), pattern),
        width_e = format.exp_bits() as usize,
        width_f = format.frac_bits() as usize,
    )
}

fn main() {
    let opt = get_and_check_options();
    let format = FloatxFormat::new(opt.tot_bits, opt.exp_bits);

    let start = Instant::now();
    println!(
        "{}",
        opt.values
            .iter()
            .map(|&val| {
                let pattern = double_to_floatx(val, opt.tot_bits, opt.exp_bits);
                format!("{:>24} {:#018x}  {}", val, pattern, split_fields(format, pattern))
            })
            .join("\n")
    );

    eprintln!(
        "Total runtime: {} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
}
