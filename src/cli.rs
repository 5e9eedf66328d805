#[derive(clap::Parser, Debug)]
#[command(about = "Summarize a web-server access log fetched over HTTP")]
pub struct Args {
    /// URL of the access log to download
    #[arg(long)]
    pub url: String,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
