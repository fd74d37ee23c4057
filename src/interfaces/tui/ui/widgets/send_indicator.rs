//! 发送按钮组件
//!
//! 发送中显示旋转指示器并禁用点击样式

use ratatui::style::{Modifier, Style};

use crate::interfaces::tui::app::SendState;
use crate::interfaces::tui::constants::{colors, status_text};

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAME_MS: u64 = 80;

/// 发送按钮状态显示
pub struct SendIndicator {
    state: SendState,
    clock_ms: u64,
    active: bool,
    hovered: bool,
}

impl SendIndicator {
    pub fn new(state: SendState, clock_ms: u64) -> Self {
        Self {
            state,
            clock_ms,
            active: false,
            hovered: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// 当前旋转帧
    pub fn spinner_frame(clock_ms: u64) -> char {
        let idx = (clock_ms / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[idx]
    }

    /// 按钮文案
    pub fn label(&self) -> String {
        match self.state {
            SendState::Idle => format!("[ {} ]", status_text::SEND_BUTTON),
            SendState::Sending => format!(
                "{} {}",
                Self::spinner_frame(self.clock_ms),
                status_text::SENDING
            ),
        }
    }

    /// 按钮样式
    ///
    /// The sending state greys the button out, matching the disabled
    /// submit button while a request is in flight.
    pub fn style(&self) -> Style {
        match self.state {
            SendState::Sending => Style::default().fg(colors::MUTED),
            SendState::Idle if self.active => Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD),
            SendState::Idle if self.hovered => Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
            SendState::Idle => Style::default().fg(colors::PRIMARY),
        }
    }
}
