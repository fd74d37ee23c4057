//! 联系表单状态管理
//!
//! 管理联系表单的字段焦点、输入内容与校验错误

use std::collections::HashMap;

/// 表单中可聚焦的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
    SendButton,
}

impl ContactField {
    /// Tab 键的循环顺序
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
        ContactField::SendButton,
    ];

    /// 获取下一个字段(循环)
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 获取上一个字段(循环)
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 字段标识符
    pub fn field_name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
            ContactField::SendButton => "send",
        }
    }

    /// 显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
            ContactField::SendButton => "Send",
        }
    }

    /// 输入提示
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "you@example.com",
            ContactField::Subject => "What is this about?",
            ContactField::Message => "Tell me everything",
            ContactField::SendButton => "",
        }
    }
}

/// 发送状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// 联系表单状态
#[derive(Debug, Default)]
pub struct ContactFormState {
    /// 姓名输入
    pub name_input: String,
    /// 邮箱输入
    pub email_input: String,
    /// 主题输入
    pub subject_input: String,
    /// 正文输入
    pub message_input: String,
    /// 当前聚焦的字段
    pub currently_editing: Option<ContactField>,
    /// 校验错误信息
    pub validation_errors: HashMap<String, String>,
    /// 发送状态
    pub send_state: SendState,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否正在后台发送
    pub fn is_sending(&self) -> bool {
        self.send_state == SendState::Sending
    }

    /// 切换到下一个字段
    pub fn focus_next(&mut self) {
        self.currently_editing = Some(match self.currently_editing {
            Some(field) => field.next(),
            None => ContactField::Name,
        });
    }

    /// 切换到上一个字段
    pub fn focus_prev(&mut self) {
        self.currently_editing = Some(match self.currently_editing {
            Some(field) => field.prev(),
            None => ContactField::Name,
        });
    }

    /// 获取当前聚焦字段的可变输入引用
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(ContactField::Name) => Some(&mut self.name_input),
            Some(ContactField::Email) => Some(&mut self.email_input),
            Some(ContactField::Subject) => Some(&mut self.subject_input),
            Some(ContactField::Message) => Some(&mut self.message_input),
            Some(ContactField::SendButton) | None => None,
        }
    }

    /// 向当前字段追加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
        }
    }

    /// 从当前字段删除末尾字符
    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
    }

    /// 设置校验错误
    pub fn set_error(&mut self, field: &str, message: String) {
        self.validation_errors.insert(field.to_string(), message);
    }

    /// 获取字段的校验错误
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.validation_errors.get(field)
    }

    /// 清除所有校验错误
    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    /// 是否存在校验错误
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// 发送成功后清空输入并复位焦点
    pub fn reset_fields(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
        self.subject_input.clear();
        self.message_input.clear();
        self.clear_errors();
        self.currently_editing = Some(ContactField::Name);
    }
}
