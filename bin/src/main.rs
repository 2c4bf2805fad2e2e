// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Result;
use clap::Parser;
use slog::Drain;

mod dispatch;

use dispatch::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    let log = setup_log(args.debug());
    args.exec(&log)
}

fn setup_log(debug: bool) -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();

    // RUST_LOG takes precedence; otherwise --debug lowers the filter from
    // INFO to DEBUG.
    let drain: Box<dyn Drain<Ok = (), Err = slog::Never> + Send> =
        if std::env::var_os("RUST_LOG").is_some() {
            Box::new(slog_envlogger::new(drain).ignore_res())
        } else {
            let level =
                if debug { slog::Level::Debug } else { slog::Level::Info };
            Box::new(slog::LevelFilter::new(drain, level).ignore_res())
        };

    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, slog::o!())
}
