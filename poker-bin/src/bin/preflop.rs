use std::error::Error;
use std::io::{stdin, BufRead};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use poker_core::deck::DeckSeed;
use poker_core::histogram::run_histogram;
use poker_core::showdown::{Enumeration, EnumerationConfig, Shutdown};
use poker_core::util::{init_logging, parse_duration};
use structopt::StructOpt;

fn parse_duration_arg(src: &str) -> Result<Duration, String> {
    parse_duration(src).ok_or_else(|| format!("invalid duration {:?}, try 30s, 5m, 2h or 1d", src))
}

#[derive(StructOpt)]
#[structopt(about = "Hand category histogram and exhaustive preflop showdown equities")]
struct Opt {
    #[structopt(short, long, help = "Total worker threads [default: number of CPUs]")]
    threads: Option<usize>,
    #[structopt(
        short,
        long,
        default_value = "100000",
        help = "Random hands to classify, split across threads"
    )]
    iterations: u64,
    #[structopt(
        short,
        long,
        help = "Enumerate every preflop showdown instead of sampling hands"
    )]
    permutations: bool,
    #[structopt(long, default_value)]
    seed: DeckSeed,
    #[structopt(long, default_value = "10", help = "Seconds between progress reports")]
    report_secs: u64,
    #[structopt(long, default_value = "500000")]
    flush_interval: u64,
    #[structopt(long, default_value = "10000")]
    queue_capacity: usize,
    #[structopt(
        long,
        parse(try_from_str = parse_duration_arg),
        help = "Stop the enumeration after this long, e.g. 30s, 5m, 2h or 1d"
    )]
    duration: Option<Duration>,
    #[structopt(
        long,
        help = "Only print the N best classes that have more than 100 showdowns"
    )]
    top: Option<usize>,
    #[structopt(short, long, help = "Debug logging")]
    verbose: bool,
}

/// Type "Q" and Enter to stop the enumeration.
fn watch_stdin(shutdown: Shutdown) {
    thread::spawn(move || {
        for line in stdin().lock().lines() {
            match line {
                Ok(l) if l.trim().eq_ignore_ascii_case("q") => {
                    warn!("stop requested, finishing up");
                    shutdown.cancel();
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

fn stop_after(shutdown: Shutdown, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        if !shutdown.is_cancelled() {
            warn!("time is up after {:?}, stopping", after);
            shutdown.cancel();
        }
    });
}

fn histogram(opt: &Opt, threads: usize) -> Result<(), Box<dyn Error>> {
    info!("sampling {} hands with seed {}", opt.iterations, opt.seed);
    let report = run_histogram(threads, opt.iterations, &opt.seed)?;
    println!("{}", report);
    Ok(())
}

fn enumerate(opt: &Opt, threads: usize) -> Result<(), Box<dyn Error>> {
    let config = EnumerationConfig::new(threads)
        .with_queue_capacity(opt.queue_capacity)
        .with_flush_interval(opt.flush_interval)
        .with_report_interval(Duration::from_secs(opt.report_secs.max(1)));
    let enumeration = Enumeration::new(config)?;
    watch_stdin(enumeration.shutdown());
    if let Some(after) = opt.duration {
        info!("enumeration will stop after {:?}", after);
        stop_after(enumeration.shutdown(), after);
    }
    let summary = enumeration.run()?;
    println!("{}", summary);
    let results = enumeration.results();
    match opt.top {
        Some(n) => println!("Showdown results:\n{}", results.render_limited(n)),
        None => println!("Showdown results:\n{}", results),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_logging(opt.verbose)?;
    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    if opt.permutations {
        enumerate(&opt, threads)
    } else {
        histogram(&opt, threads)
    }
}
