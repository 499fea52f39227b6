// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::cmd::check::check_dataset;
use crate::cmd::export::export_dataset;
use crate::cmd::orphans::list_orphans;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_dataset_stats;
use crate::cmd::view::server::ServerConfig;
use crate::cmd::view::view;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Browse flashcards in the web interface.
    View {
        /// Path to the dataset directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Use the built-in sample dataset instead of a directory.
        #[arg(long, conflicts_with = "directory")]
        sample: bool,
        /// The address to listen on.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't open the browser automatically.
        #[arg(long)]
        no_open: bool,
    },
    /// Check the integrity of a dataset.
    Check {
        /// Path to the dataset directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Export the dataset as JSON.
    Export {
        /// Path to the dataset directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Print dataset statistics.
    Stats {
        /// Path to the dataset directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Which format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// List files in the dataset directory that no flashcard refers to.
    Orphans {
        /// Path to the dataset directory. By default, the current working directory is used.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::View {
            directory,
            sample,
            host,
            port,
            no_open,
        } => {
            let config = ServerConfig {
                host,
                port,
                open_browser: !no_open,
            };
            view(directory, sample, config).await
        }
        Command::Check { directory } => check_dataset(directory),
        Command::Export { directory } => export_dataset(directory),
        Command::Stats { directory, format } => print_dataset_stats(directory, format),
        Command::Orphans { directory } => list_orphans(directory),
    }
}
