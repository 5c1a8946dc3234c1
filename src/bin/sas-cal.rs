extern crate sas_calendar as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use lib::calendar::MonthIndex;
use lib::cmds::{self, Cmd};
use lib::control::{CalendarControl, Control};
use lib::ui::MonthPane;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sas-cal",
    author = "Projeto SAS developers",
    about = "Delivery calendar of the SAS app."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(short = "m", long = "month", help = "month to show first, as YYYY-MM")]
    pub month: Option<MonthIndex>,

    #[structopt(
        short = "d",
        long = "date",
        help = "mark a delivery date, as YYYY-MM-DD (repeatable)"
    )]
    pub dates: Vec<NaiveDate>,

    #[structopt(
        short = "i",
        long = "interactive",
        help = "page through months and pick days from stdin"
    )]
    pub interactive: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

const HELP: &str = "[count]n: next month  [count]p: previous month  t: today  <day>: pick  q: quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    std::panic::set_hook(Box::new(move |info| {
        println!("sas-cal ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let today = Local::now().date_naive();
    let initial = args
        .month
        .or(config.calendar.initial_month)
        .unwrap_or_else(|| MonthIndex::containing(today));

    let mut marked: HashSet<NaiveDate> = config.marked_dates();
    marked.extend(args.dates.iter().copied());

    let picked = Rc::new(RefCell::new(None));
    let picked_sink = Rc::clone(&picked);

    let mut control = CalendarControl::new(initial, today)
        .marked_dates(marked)
        .day_click_callback(move |date| *picked_sink.borrow_mut() = Some(date))
        .month_change_callback(|month| log::info!("Month changed to: {}", month));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(
        out,
        "{}",
        MonthPane::new(control.calendar_month(), &config.names, &config.theme)
    )?;

    if !args.interactive {
        return Ok(());
    }

    writeln!(out, "{}", HELP)?;
    out.flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        control.set_today(Local::now().date_naive());

        let result = cmds::parse_cmd(&line).and_then(|cmd| control.send_cmd(&cmd));

        match result {
            Ok(Cmd::Exit) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("{}", e);
                writeln!(out, "{}", e)?;
                continue;
            }
        }

        write!(
            out,
            "{}",
            MonthPane::new(control.calendar_month(), &config.names, &config.theme)
        )?;

        if let Some(date) = picked.borrow_mut().take() {
            writeln!(out, "Selected date: {}", date)?;
            for delivery in config.deliveries_on(date) {
                writeln!(out, "  {}", delivery)?;
                if !delivery.description.is_empty() {
                    writeln!(out, "    {}", delivery.description)?;
                }
            }
            if control.is_marked(&date) && config.deliveries_on(date).next().is_none() {
                writeln!(out, "Has delivery")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
