//! TUI 常量定义
//!
//! 集中管理 TUI 界面的时序、布局与配色常量

/// Target frame interval in milliseconds.
pub const TICK_RATE_MS: u64 = 16;

/// Height of the sticky navigation bar.
pub const NAVBAR_HEIGHT: u16 = 3;
/// Height of the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 3;
/// Height of the shortcut footer.
pub const FOOTER_HEIGHT: u16 = 2;

/// Rows the active-section probe sits below the top of the viewport.
/// Mirrors the navbar height so a section becomes active as soon as it
/// slides under the bar.
pub const NAV_PROBE_ROWS: f32 = 3.0;

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_SCROLL_ROWS: f32 = 3.0;
/// Rows scrolled per PageUp/PageDown press.
pub const PAGE_SCROLL_STEP: f32 = 10.0;

/// Length of the fade-in when the TUI starts.
pub const INTRO_FADE_MS: u64 = 400;

/// Minimum terminal size before we give up and show a notice.
pub const MIN_TERM_WIDTH: u16 = 40;
pub const MIN_TERM_HEIGHT: u16 = 15;

/// Maximum text column width for page content.
pub const CONTENT_MAX_WIDTH: u16 = 96;

/// 弹窗尺寸配置(百分比)
pub struct PopupSize {
    pub width_percent: u16,
    pub height_percent: u16,
}

/// 弹窗尺寸常量
pub mod popup {
    use super::PopupSize;

    /// 联系表单弹窗
    pub const CONTACT_FORM: PopupSize = PopupSize {
        width_percent: 64,
        height_percent: 85,
    };

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize {
        width_percent: 70,
        height_percent: 80,
    };

    /// 提示弹窗
    pub const ALERT: PopupSize = PopupSize {
        width_percent: 56,
        height_percent: 30,
    };

    /// 退出确认弹窗
    pub const EXITING: PopupSize = PopupSize {
        width_percent: 50,
        height_percent: 25,
    };
}

/// 颜色常量
pub mod colors {
    use ratatui::style::Color;

    /// 主色调(青)
    pub const PRIMARY: Color = Color::Rgb(0, 255, 245);
    /// 强调色(品红)
    pub const ACCENT: Color = Color::Rgb(255, 0, 110);
    /// 紫色点缀
    pub const TERTIARY: Color = Color::Rgb(127, 90, 240);
    /// 正文颜色
    pub const TEXT: Color = Color::Rgb(184, 193, 236);
    /// 弱化文本
    pub const MUTED: Color = Color::DarkGray;
    /// 成功状态
    pub const SUCCESS: Color = Color::Green;
    /// 警告状态
    pub const WARNING: Color = Color::Yellow;
    /// 错误状态
    pub const ERROR: Color = Color::Red;
    /// 选中高亮背景
    pub const HIGHLIGHT_BG: Color = Color::Rgb(0, 255, 245);
    /// 选中高亮前景
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 状态栏与表单文案
pub mod status_text {
    pub const READY: &str = "Ready";
    pub const SEND_BUTTON: &str = "Send Message";
    pub const SENDING: &str = "Sending...";
    pub const SENT_OK: &str = "Message sent successfully! I will get back to you soon.";
    pub const SEND_FAILED: &str = "Failed to send message. Please try again.";
    pub const EASTER_EGG: &str = "Cheat code accepted. Enjoy the colors!";
    pub const EMAIL_COPIED: &str = "Email address copied to clipboard";
}
