//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 在按钮之间切换焦点
    ToggleFocus,

    /// 确认/提交
    Confirm,
}
