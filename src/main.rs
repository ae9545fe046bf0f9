use multistage::*;

use clap::value_t_or_exit;
use std::error::Error;

// -v for info, -vv for debug; RUST_LOG still overrides per module
fn log_level(verbosity: u64) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

// only the first channel is kept
fn read_wav(path: &str) -> Result<Samples, Box<dyn Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let data: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => {
            reader.samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect::<Result<_, _>>()?
        },
        hound::SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f64;
            reader.samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        },
    };
    let channels = (spec.channels as usize).max(1);
    let mono = data.into_iter().step_by(channels).collect();
    Ok(Samples::new(spec.sample_rate as f64, mono)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = clap::App::new("multistage")
        .about("run a signal through an fir lowpass, then four iir \
                discretizations of the same analog prototype")
        .arg(clap::Arg::with_name("input")
             .short("i")
             .long("input")
             .value_name("FILE")
             .help("Read the signal from a WAV file instead of generating a tone.")
             .takes_value(true))
        .arg(clap::Arg::with_name("rate")
             .short("r")
             .long("rate")
             .value_name("HZ")
             .help("Sample rate of the generated tone.")
             .takes_value(true)
             .default_value("1000"))
        .arg(clap::Arg::with_name("tone")
             .long("tone")
             .value_name("HZ")
             .help("Frequency of the generated tone.")
             .takes_value(true)
             .default_value("50"))
        .arg(clap::Arg::with_name("length")
             .short("l")
             .long("length")
             .value_name("SECONDS")
             .help("Length of the generated tone.")
             .takes_value(true)
             .default_value("1"))
        .arg(clap::Arg::with_name("fir-cutoff")
             .long("fir-cutoff")
             .value_name("FRACTION")
             .help("FIR cutoff, as a fraction of the sample rate.")
             .takes_value(true)
             .default_value("0.1"))
        .arg(clap::Arg::with_name("taps")
             .short("t")
             .long("taps")
             .value_name("N")
             .help("Number of FIR taps.")
             .takes_value(true)
             .default_value("31"))
        .arg(clap::Arg::with_name("window")
             .short("w")
             .long("window")
             .value_name("WINDOW")
             .help("FIR window.")
             .takes_value(true)
             .possible_values(&["rectangular", "none", "hamming", "blackman"])
             .default_value("blackman"))
        .arg(clap::Arg::with_name("iir-cutoff")
             .long("iir-cutoff")
             .value_name("HZ")
             .help("IIR prototype cutoff.")
             .takes_value(true)
             .default_value("0.1"))
        .arg(clap::Arg::with_name("points")
             .short("p")
             .long("points")
             .value_name("N")
             .help("Number of frequency response points.")
             .takes_value(true)
             .default_value("1000"))
        .arg(clap::Arg::with_name("output")
             .short("o")
             .long("output")
             .value_name("FILE")
             .help("Write plot to a file.")
             .takes_value(true)
             .default_value("multistage.png"))
        .arg(clap::Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("Log more; repeat for stage detail."))
        .get_matches();

    env_logger::Builder::new()
        .filter_level(log_level(matches.occurrences_of("verbose")))
        .parse_env("RUST_LOG")
        .try_init()?;

    let input = if let Some(path) = matches.value_of("input") {
        read_wav(path)?
    } else {
        let rate = value_t_or_exit!(matches, "rate", f64);
        let tone = value_t_or_exit!(matches, "tone", f64);
        signal::sine(rate, tone, 0.0)
            .take(value_t_or_exit!(matches, "length", f64))
            .sampled()?
    };
    log::info!("input: {} samples at {} Hz", input.len(), input.rate());

    let window: Window = matches.value_of("window").unwrap_or("blackman")
        .parse()?;
    let out = Multistage::new()
        .fir_cutoff(value_t_or_exit!(matches, "fir-cutoff", f64))
        .taps(value_t_or_exit!(matches, "taps", usize))
        .window(window)
        .iir_cutoff(value_t_or_exit!(matches, "iir-cutoff", f64))
        .points(value_t_or_exit!(matches, "points", usize))
        .run(&input)?;

    println!("fir taps: {:?}", out.taps);
    for branch in &out.branches {
        let dc = branch.response.dc().map(|v| v.norm()).unwrap_or(0.0);
        println!("{:>18}: b = {:?}, a = {:?}, |H(dc)| = {:.6}",
                 branch.method.name(), branch.coefficients.b,
                 branch.coefficients.a, dc);
    }
    if let Some(peak) = fft::peak_frequency(&out.fir_output) {
        println!("fir output peak: {} Hz", peak);
    }

    if let Some(output) = matches.value_of("output") {
        plot::render(output, (1200, 2400), &input, &out)?;
    }
    Ok(())
}
