/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::env;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use iksnode::{BadJid, DocumentError, IqStanza, Jid};

fn print_version() {
    println!("iksiq (iksnode) v{}", iksnode::VERSION);
}

fn print_usage() {
    println!(concat!(
        "Usage: iksiq [OPTIONS]\n",
        "This tool prints an IQ stanza for resource binding or session establishment.\n",
        "Options:\n",
        "  -i, --id <ID>          Stanza id (default: bind_1)\n",
        "  -t, --type <TYPE>      Stanza type: set, result or error (default: set)\n",
        "  -r, --resource <RES>   Resource to request, server assigns one if omitted\n",
        "  -s, --session          Build a session request instead of a bind request\n",
        "      --to <JID>         Recipient address\n",
        "      --from <JID>       Sender address\n",
        "  -h, --help             Display this help message and exit\n",
        "  -v, --version          Display the version and exit\n",
        "Log verbosity is controlled by the RUST_LOG environment variable."
    ));
}

enum IksiqError {
    BadJid(BadJid),
    DocumentError(DocumentError),
}

impl From<BadJid> for IksiqError {
    fn from(err: BadJid) -> Self {
        IksiqError::BadJid(err)
    }
}

impl From<DocumentError> for IksiqError {
    fn from(err: DocumentError) -> Self {
        IksiqError::DocumentError(err)
    }
}

#[derive(Default)]
struct Options {
    id: Option<String>,
    iq_type: Option<String>,
    resource: Option<String>,
    session: bool,
    to: Option<String>,
    from: Option<String>,
}

fn build_stanza(options: &Options) -> Result<IqStanza, IksiqError> {
    let id = options.id.as_deref().unwrap_or("bind_1");
    let iq_type = options.iq_type.as_deref().unwrap_or("set");
    let mut iq = IqStanza::create(id, iq_type)?;
    if let Some(to) = &options.to {
        iq.set_to(&Jid::new(to)?)?;
    }
    if let Some(from) = &options.from {
        iq.set_from(&Jid::new(from)?)?;
    }
    if options.session {
        iq.set_session()?;
    } else {
        iq.set_bind_with_resource(options.resource.as_deref())?;
    }
    debug!(id = iq.id(), size = iq.str_size(), "stanza built");

    Ok(iq)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let mut args = env::args();
    let mut options = Options::default();

    // Skip the first argument (program name)
    args.next();
    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "-i" | "--id" => &mut options.id,
            "-t" | "--type" => &mut options.iq_type,
            "-r" | "--resource" => &mut options.resource,
            "--to" => &mut options.to,
            "--from" => &mut options.from,
            "-s" | "--session" => {
                options.session = true;
                continue;
            }
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "-v" | "--version" => {
                print_version();
                return ExitCode::SUCCESS;
            }
            _ => {
                eprintln!("Error: unknown option {arg}");
                return ExitCode::FAILURE;
            }
        };
        match args.next() {
            Some(value) => *slot = Some(value),
            None => {
                eprintln!("Error: value expected after {arg}");
                return ExitCode::FAILURE;
            }
        }
    }

    match build_stanza(&options) {
        Ok(iq) => {
            println!("{}", iq.seal());
            ExitCode::SUCCESS
        }
        Err(IksiqError::BadJid(err)) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
        Err(IksiqError::DocumentError(err)) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
