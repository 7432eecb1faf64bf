use std::io;

use clap::error::ErrorKind;
use clap::Parser;
use kuwors::{chart, display, menu, Credentials, KuwoApi, PlaylistOrder};

#[derive(Parser)]
#[command(name = "kuwors-cli")]
#[command(about = "CLI for kuwors - Kuwo music API client", long_about = None)]
struct Cli {
    /// Kuwo secret header token (can also be set via KUWO_SECRET env var)
    #[arg(long, env = "KUWO_SECRET", default_value = "", hide_env_values = true)]
    secret: String,

    /// Raw browser cookie string (can also be set via KUWO_COOKIE env var)
    #[arg(long, env = "KUWO_COOKIE", default_value = "", hide_env_values = true)]
    cookie: String,

    /// Run all endpoints once and exit
    #[arg(short, long, conflicts_with_all = ["rank", "playlist"])]
    all: bool,

    /// Print the popular chart and exit
    #[arg(short, long, conflicts_with = "playlist")]
    rank: bool,

    /// Print the hottest playlists and exit
    #[arg(short, long)]
    playlist: bool,
}

fn print_setup_instructions() {
    println!("\nSecret and cookies are not set!");
    println!("\nHow to obtain them:");
    println!("1. Visit https://kuwo.cn/rankList in a browser");
    println!("2. Open the developer tools (F12) and switch to the Network tab, then reload");
    println!("3. Find the musicList request and copy from its request headers:");
    println!("   - secret: xxxx");
    println!("   - cookie: xxxx");
    println!("4. Pass them via --secret/--cookie or the KUWO_SECRET/KUWO_COOKIE env vars");
    println!("\nThen run this program again.\n");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("Usage: kuwors-cli [--all|--rank|--playlist]");
            return Ok(());
        }
    };

    // Startup precondition: no network call with implausible credentials.
    let creds = Credentials::new(cli.secret, cli.cookie);
    if creds.validate().is_err() {
        print_setup_instructions();
        return Ok(());
    }

    let api = KuwoApi::new(&creds)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.all {
        menu::run_all(&api, &mut out).await?;
    } else if cli.rank {
        display::write_songs(
            &mut out,
            &api.rank(chart::POPULAR, 1, 20).await,
            "Popular chart Top 20",
        )?;
    } else if cli.playlist {
        display::write_playlists(
            &mut out,
            &api.playlist(1, 20, PlaylistOrder::Hot).await,
            "Hot playlists Top 20",
        )?;
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        menu::interactive(&api, &mut input, &mut out).await?;
    }

    Ok(())
}
