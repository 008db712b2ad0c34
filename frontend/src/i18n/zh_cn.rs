pub mod app {
    pub const READY: &str = "Custom Theme initialized successfully!";
}

pub mod search {
    pub const PLACEHOLDER: &str = "搜索文章...";
    pub const CLOSE: &str = "关闭搜索";
    pub const UNDER_DEVELOPMENT: &str = "搜索功能正在开发中...";
    pub const KEYWORD_LABEL: &str = "搜索关键词: ";
}

pub mod code_copy {
    pub const TITLE: &str = "复制代码";
}
