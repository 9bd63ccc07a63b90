use std::{collections::HashSet, sync::Arc};

use parking_lot::Mutex;

use super::{AxApi, DisplaySource, WindowSource};
use crate::{
    Error, Result,
    display::DisplayDescriptor,
    geom::{Point, Rect, Size},
    resolve::WindowDescriptor,
};

/// Handle into the mock Accessibility registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockHandle {
    /// Owning process id.
    pub pid: i32,
    /// Index within the process's window list.
    pub index: usize,
}

/// A scripted Accessibility window.
#[derive(Debug, Clone)]
struct AxWindow {
    frame: Rect,
    reject_size: bool,
    reject_position: bool,
    unreadable: bool,
}

/// Shared mutable state behind [`MockPlatform`].
#[derive(Debug, Default)]
struct State {
    windows: Vec<WindowDescriptor>,
    displays: Vec<DisplayDescriptor>,
    primary: Option<DisplayDescriptor>,
    ax: Vec<(i32, Vec<AxWindow>)>,
    apps_unavailable: HashSet<i32>,
}

/// Simple mock implementation for tests (enabled with `test-utils` feature).
///
/// Every collaborator call is recorded; size/position sets update the
/// scripted frame unless the window is set to reject them.
#[derive(Clone, Default)]
pub struct MockPlatform {
    calls: Arc<Mutex<Vec<String>>>,
    state: Arc<Mutex<State>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn set_windows(&self, wins: Vec<WindowDescriptor>) {
        self.state.lock().windows = wins;
    }
    pub fn set_displays(&self, displays: Vec<DisplayDescriptor>) {
        self.state.lock().displays = displays;
    }
    pub fn set_primary(&self, primary: Option<DisplayDescriptor>) {
        self.state.lock().primary = primary;
    }
    /// Register an Accessibility window for `pid`; returns its index.
    pub fn add_ax_window(&self, pid: i32, frame: Rect) -> usize {
        let mut st = self.state.lock();
        let win = AxWindow {
            frame,
            reject_size: false,
            reject_position: false,
            unreadable: false,
        };
        if let Some((_, list)) = st.ax.iter_mut().find(|(p, _)| *p == pid) {
            list.push(win);
            list.len() - 1
        } else {
            st.ax.push((pid, vec![win]));
            0
        }
    }
    pub fn set_reject_size(&self, pid: i32, index: usize, v: bool) {
        self.with_ax(pid, index, |w| w.reject_size = v);
    }
    pub fn set_reject_position(&self, pid: i32, index: usize, v: bool) {
        self.with_ax(pid, index, |w| w.reject_position = v);
    }
    /// Make position/size reads fail for one window.
    pub fn set_unreadable(&self, pid: i32, index: usize, v: bool) {
        self.with_ax(pid, index, |w| w.unreadable = v);
    }
    pub fn set_app_windows_unavailable(&self, pid: i32) {
        self.state.lock().apps_unavailable.insert(pid);
    }
    /// Current scripted frame of an Accessibility window.
    pub fn ax_frame(&self, pid: i32, index: usize) -> Option<Rect> {
        let st = self.state.lock();
        st.ax
            .iter()
            .find(|(p, _)| *p == pid)
            .and_then(|(_, list)| list.get(index))
            .map(|w| w.frame)
    }
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
    pub fn calls_contains(&self, s: &str) -> bool {
        self.calls.lock().iter().any(|x| x == s)
    }
    /// Calls that mutate a window.
    pub fn mutations(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with("set_"))
            .cloned()
            .collect()
    }
    fn note(&self, s: &str) {
        self.calls.lock().push(s.to_string());
    }
    fn with_ax<F: FnOnce(&mut AxWindow)>(&self, pid: i32, index: usize, f: F) {
        let mut st = self.state.lock();
        if let Some(w) = st
            .ax
            .iter_mut()
            .find(|(p, _)| *p == pid)
            .and_then(|(_, list)| list.get_mut(index))
        {
            f(w);
        }
    }
    fn read_ax(&self, h: &MockHandle) -> Result<AxWindow> {
        let st = self.state.lock();
        let w = st
            .ax
            .iter()
            .find(|(p, _)| *p == h.pid)
            .and_then(|(_, list)| list.get(h.index))
            .cloned()
            .ok_or(Error::WindowGone)?;
        if w.unreadable {
            return Err(Error::Unsupported);
        }
        Ok(w)
    }
}

impl WindowSource for MockPlatform {
    fn list_windows(&self) -> Vec<WindowDescriptor> {
        self.note("list_windows");
        self.state.lock().windows.clone()
    }
}

impl DisplaySource for MockPlatform {
    fn displays(&self) -> Result<Vec<DisplayDescriptor>> {
        self.note("displays");
        Ok(self.state.lock().displays.clone())
    }
    fn primary_display(&self) -> Option<DisplayDescriptor> {
        self.note("primary_display");
        self.state.lock().primary.clone()
    }
}

impl AxApi for MockPlatform {
    type Handle = MockHandle;

    fn app_windows(&self, pid: i32) -> Result<Vec<MockHandle>> {
        self.note("app_windows");
        let st = self.state.lock();
        if st.apps_unavailable.contains(&pid) {
            // kAXErrorCannotComplete
            return Err(Error::AxCode(-25204));
        }
        let n = st
            .ax
            .iter()
            .find(|(p, _)| *p == pid)
            .map(|(_, list)| list.len())
            .unwrap_or(0);
        Ok((0..n).map(|index| MockHandle { pid, index }).collect())
    }
    fn position(&self, win: &MockHandle) -> Result<Point> {
        self.note("position");
        self.read_ax(win).map(|w| w.frame.origin())
    }
    fn size(&self, win: &MockHandle) -> Result<Size> {
        self.note("size");
        self.read_ax(win).map(|w| w.frame.size())
    }
    fn set_position(&self, win: &MockHandle, p: Point) -> Result<()> {
        self.note("set_position");
        if self.read_ax(win)?.reject_position {
            // kAXErrorAttributeUnsupported
            return Err(Error::AxCode(-25205));
        }
        self.with_ax(win.pid, win.index, |w| {
            w.frame.x = p.x;
            w.frame.y = p.y;
        });
        Ok(())
    }
    fn set_size(&self, win: &MockHandle, s: Size) -> Result<()> {
        self.note("set_size");
        if self.read_ax(win)?.reject_size {
            return Err(Error::AxCode(-25205));
        }
        self.with_ax(win.pid, win.index, |w| {
            w.frame.w = s.width;
            w.frame.h = s.height;
        });
        Ok(())
    }
}
