mod calendar;

pub use calendar::CalendarControl;

use crate::cmds::{Cmd, CmdResult};

pub trait Control {
    fn send_cmd(&mut self, cmd: &Cmd) -> CmdResult;
}
