//! Startup processing

/// CLI / TUI 模式预处理(预留扩展点)
///
/// 当前为空实现,供未来 CLI/TUI 特定初始化使用。
pub async fn cli_tui_pre_startup() {
    // Reserved for future CLI/TUI-specific initialization
}
