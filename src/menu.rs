//! Mode dispatch: the fixed batch sequence and the interactive menu loop.
//!
//! The loop is generic over its input and output so tests can drive it with
//! a scripted `Cursor` and capture everything written.

use std::io::{self, BufRead, Write};

use crate::api::{chart, KuwoApi};
use crate::display::{self, RULE};
use crate::models::PlaylistOrder;

/// One entry of the fixed batch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchCall {
    Rank {
        chart_id: u32,
        page: u32,
        size: u32,
        title: &'static str,
    },
    Playlists {
        page: u32,
        size: u32,
        order: PlaylistOrder,
        title: &'static str,
    },
}

/// The five calls issued by "run all", in order.
pub const BATCH: [BatchCall; 5] = [
    BatchCall::Rank {
        chart_id: chart::SOARING,
        page: 1,
        size: 5,
        title: "Soaring chart Top 5",
    },
    BatchCall::Rank {
        chart_id: chart::HOT,
        page: 1,
        size: 5,
        title: "Hot songs Top 5",
    },
    BatchCall::Rank {
        chart_id: chart::POPULAR,
        page: 1,
        size: 5,
        title: "Popular chart Top 5",
    },
    BatchCall::Playlists {
        page: 1,
        size: 5,
        order: PlaylistOrder::Hot,
        title: "Hot playlists Top 5",
    },
    BatchCall::Playlists {
        page: 1,
        size: 5,
        order: PlaylistOrder::New,
        title: "New playlists Top 5",
    },
];

/// Run the whole batch sequence, printing each result. Failures print their
/// one-line diagnostic and the sequence continues.
pub async fn run_all<W: Write>(api: &KuwoApi, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nKuwo API - running all endpoints")?;
    for call in &BATCH {
        match *call {
            BatchCall::Rank {
                chart_id,
                page,
                size,
                title,
            } => display::write_songs(out, &api.rank(chart_id, page, size).await, title)?,
            BatchCall::Playlists {
                page,
                size,
                order,
                title,
            } => display::write_playlists(out, &api.playlist(page, size, order).await, title)?,
        }
    }
    Ok(())
}

/// A parsed interactive menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    SoaringChart,
    HotChart,
    PopularChart,
    HotPlaylists,
    NewPlaylists,
    RunAll,
}

impl MenuChoice {
    /// Parse one line of input; `None` for anything off the menu.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(MenuChoice::Exit),
            "1" => Some(MenuChoice::SoaringChart),
            "2" => Some(MenuChoice::HotChart),
            "3" => Some(MenuChoice::PopularChart),
            "4" => Some(MenuChoice::HotPlaylists),
            "5" => Some(MenuChoice::NewPlaylists),
            "6" => Some(MenuChoice::RunAll),
            _ => None,
        }
    }
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "Kuwo music API")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "1. Soaring chart")?;
    writeln!(out, "2. Hot songs chart")?;
    writeln!(out, "3. Popular chart")?;
    writeln!(out, "4. Hot playlists")?;
    writeln!(out, "5. New playlists")?;
    writeln!(out, "6. Run all")?;
    writeln!(out, "0. Exit")?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Blocking read-evaluate-print loop over the menu.
///
/// Terminates on choice `0` or end of input; anything unrecognized prints an
/// error line and redisplays the menu.
pub async fn interactive<R: BufRead, W: Write>(
    api: &KuwoApi,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        write_menu(out)?;
        write!(out, "\nChoice (0-6): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            Some(MenuChoice::SoaringChart) => display::write_songs(
                out,
                &api.rank(chart::SOARING, 1, 20).await,
                "Soaring chart Top 20",
            )?,
            Some(MenuChoice::HotChart) => display::write_songs(
                out,
                &api.rank(chart::HOT, 1, 20).await,
                "Hot songs Top 20",
            )?,
            Some(MenuChoice::PopularChart) => display::write_songs(
                out,
                &api.rank(chart::POPULAR, 1, 20).await,
                "Popular chart Top 20",
            )?,
            Some(MenuChoice::HotPlaylists) => display::write_playlists(
                out,
                &api.playlist(1, 20, PlaylistOrder::Hot).await,
                "Hot playlists Top 20",
            )?,
            Some(MenuChoice::NewPlaylists) => display::write_playlists(
                out,
                &api.playlist(1, 20, PlaylistOrder::New).await,
                "New playlists Top 20",
            )?,
            Some(MenuChoice::RunAll) => run_all(api, out).await?,
            None => writeln!(out, "Invalid choice")?,
        }
    }
}
