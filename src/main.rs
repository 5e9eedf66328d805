use anyhow::{Context, Result};

use weblog_stats::cli::Args;
use weblog_stats::fetch::fetch_lines;
use weblog_stats::parse::parse_records;
use weblog_stats::stats::{hits_per_hour, image_hit_percentage, most_popular_browser};

fn main() -> Result<()> {
    let args = Args::parse();

    let lines = fetch_lines(&args.url).context("download log")?;
    let records = parse_records(&lines).context("parse log")?;

    println!(
        "Image requests account for {:.1}% of all requests",
        image_hit_percentage(&records)
    );

    match most_popular_browser(&records) {
        Some(token) => println!("Most popular browser: {token}"),
        None => println!("No browser data available."),
    }

    // Computed in full before printing so a bad timestamp aborts with no
    // partial histogram on stdout.
    let histogram = hits_per_hour(&records).context("count hits per hour")?;
    for (hour, count) in histogram {
        println!("Hour {hour:02} has {count} hits");
    }

    Ok(())
}
