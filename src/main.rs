#![allow(unused_imports)] // workaround spurious warnings

use failure::{Error, bail};
use lazy_static::lazy_static;
use unwrap::unwrap;
use log::{debug, info};
use clap::{Arg, App, AppSettings, SubCommand};
use serde::Serialize;

use std::io;
use std::io::Write;

use wasm_assembler::{FuncBody, ImmediateKind, Module, Op, ValType};

mod logger;

#[derive(Serialize)]
struct OpEntry {
    name: &'static str,
    opcode: Vec<u8>,
    immediates: &'static [ImmediateKind],
}

impl OpEntry {
    fn new(op: Op) -> OpEntry {
        OpEntry {
            name: op.name(),
            opcode: wasm_assembler::Encode::to_bytes(&op.opcode()),
            immediates: op.immediates(),
        }
    }
}

fn main() -> Result<(), Error> {
    let matches = {
        App::new("wasm-asm")
        .version("0.1.0")
        .author("canndrew")
        .about("assemble WebAssembly modules")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg({
            Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .global(true)
            .help("log more, repeat for even more")
        })
        .subcommand({
            SubCommand::with_name("demo")
            .about("write a module whose _start returns 5 + 10")
            .arg({
                Arg::with_name("out")
                .required(true)
            })
        })
        .subcommand({
            SubCommand::with_name("opcodes")
            .about("list the instruction table")
            .arg({
                Arg::with_name("json")
                .long("json")
                .help("print the table as json")
            })
        })
        .subcommand({
            SubCommand::with_name("opcode")
            .about("show one instruction")
            .arg({
                Arg::with_name("name")
                .required(true)
            })
        })
        .get_matches()
    };

    logger::init(matches.occurrences_of("verbose"))?;

    match unwrap!(matches.subcommand_name()) {
        "demo" => {
            let demo_matches = unwrap!(matches.subcommand_matches("demo"));
            let out = unwrap!(demo_matches.value_of("out"));
            demo(out)
        },
        "opcodes" => {
            let opcodes_matches = unwrap!(matches.subcommand_matches("opcodes"));
            list_opcodes(opcodes_matches.is_present("json"))
        },
        "opcode" => {
            let opcode_matches = unwrap!(matches.subcommand_matches("opcode"));
            let name = unwrap!(opcode_matches.value_of("name"));
            show_opcode(name)
        },
        _ => unreachable!(),
    }
}

fn demo(out: &str) -> Result<(), Error> {
    let mut module = Module::new();
    let ty = module.declare_type(&[], &[ValType::I32]);
    let mut body = FuncBody::new(&[]);
    body.code.i32_const(5).i32_const(10).i32_add().end();
    let func = module.finalize_function(ty, &body)?;
    module.export_function("_start", func);
    module.write_to_file(out)?;
    info!("wrote {}", out);
    Ok(())
}

fn list_opcodes(json: bool) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if json {
        let entries: Vec<OpEntry> = Op::ALL.iter().map(|&op| OpEntry::new(op)).collect();
        serde_json::to_writer_pretty(&mut stdout, &entries)?;
        writeln!(stdout)?;
        return Ok(());
    }
    for &op in Op::ALL {
        writeln!(stdout, "{}", describe(op))?;
    }
    debug!("listed {} instructions", Op::ALL.len());
    Ok(())
}

fn show_opcode(name: &str) -> Result<(), Error> {
    let op = match Op::from_name(name) {
        Some(op) => op,
        None => bail!("unknown instruction: {}", name),
    };
    println!("{}", describe(op));
    Ok(())
}

fn describe(op: Op) -> String {
    let immediates: Vec<&str> = op.immediates().iter().map(|kind| kind.name()).collect();
    format!("{:<32} {:<12} {}", op.name(), op.opcode().to_string(), immediates.join(" "))
}
