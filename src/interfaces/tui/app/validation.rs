//! 表单输入验证逻辑

use crate::interfaces::tui::app::state::App;
use crate::utils::is_valid_email;

impl App {
    /// 验证当前输入并更新错误信息
    ///
    /// Runs on every keystroke. Only flags format problems on fields that
    /// have content; missing required fields are reported at submit time.
    pub fn validate_inputs(&mut self) {
        self.form.clear_errors();

        if !self.form.email_input.is_empty() && !is_valid_email(&self.form.email_input) {
            self.form
                .set_error("email", "Enter a valid email address".to_string());
        }
    }

    /// 提交前的完整校验
    ///
    /// All four fields are required. Returns `true` when the form may be
    /// submitted.
    pub fn validate_for_submit(&mut self) -> bool {
        self.form.clear_errors();

        if self.form.name_input.trim().is_empty() {
            self.form.set_error("name", "Name is required".to_string());
        }
        if self.form.email_input.trim().is_empty() {
            self.form.set_error("email", "Email is required".to_string());
        } else if !is_valid_email(&self.form.email_input) {
            self.form
                .set_error("email", "Enter a valid email address".to_string());
        }
        if self.form.subject_input.trim().is_empty() {
            self.form
                .set_error("subject", "Subject is required".to_string());
        }
        if self.form.message_input.trim().is_empty() {
            self.form
                .set_error("message", "Message is required".to_string());
        }

        !self.form.has_errors()
    }
}
