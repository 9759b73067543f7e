//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CatalogTableTexts, CommonTexts, HelpTexts, HintTexts, InfoDescriptions,
    InfoTexts, KeyNames, ModalTexts, ModelTableTexts, NavTexts, PageTitles, StatusTexts,
    Translations, WelcomeTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Kronk 控制台",
        loading: "加载中...",
        cancel: "取消",
        close: "关闭",
        not_loaded: "—",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            refresh: "Alt+r",
            remove: "Alt+d",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            navigate: "导航",
            open: "打开",
            select: "选择",
            refresh: "刷新",
            remove: "删除",
            back: "返回",
            help: "帮助",
            quit: "退出",
        },
    },

    nav: NavTexts {
        title: "Kronk",
        models: "模型",
        catalog: "目录",
        libs: "运行库",
        security: "安全",
        home: "主页",
        list: "列表",
        running: "运行中",
        pull: "拉取",
        remove: "删除",
        create_key: "创建私钥",
        delete_key: "删除私钥",
        create_token: "创建令牌",
    },

    pages: PageTitles {
        home: "主页",
        model_list: "模型",
        model_ps: "运行中的模型",
        model_pull: "拉取模型",
        model_remove: "删除模型",
        catalog_list: "模型目录",
        catalog_pull: "从目录拉取",
        libs_pull: "拉取运行库",
        security_key_list: "私钥",
        security_key_create: "创建私钥",
        security_key_delete: "删除私钥",
        security_token_create: "创建令牌",
    },

    welcome: WelcomeTexts {
        title: "欢迎使用 Kronk",
        description: "从左侧导航栏选择一项，管理模型、模型目录和安全设置。",
        models: "本地模型",
        server: "服务器",
        models_dir: "模型目录",
    },

    model_table: ModelTableTexts {
        id: "模型",
        organization: "组织",
        family: "家族",
        size: "大小",
        modified: "修改时间",
        no_models: "模型目录中没有模型",
        load_failed: "无法读取模型",
        refreshed_at: "刷新于",
        remove_hint: "选择模型后按 Enter 删除",
    },

    catalog_table: CatalogTableTexts {
        catalog: "目录",
        model_id: "模型 ID",
        pulled: "已拉取",
        endpoint: "接口",
        images: "图像",
        audio: "音频",
        video: "视频",
        streaming: "流式",
        reasoning: "推理",
        tooling: "工具",
        yes: "是",
        no: "否",
        no_catalogs: "没有找到目录清单，运行 `kronk catalog update` 下载",
        load_failed: "无法读取目录清单",
    },

    info: InfoTexts {
        command: "命令",
        server: "服务器",
        note: "该操作由 Kronk 服务器执行。",
        descriptions: InfoDescriptions {
            model_ps: "列出服务器当前已加载的模型。",
            model_pull: "下载模型文件（可选投影文件）到模型目录。",
            catalog_pull: "按目录 ID 下载模型。",
            libs_pull: "为本机安装或升级 llama.cpp 运行库。",
            security_key_list: "列出用于签发访问令牌的私钥。",
            security_key_create: "生成新的签名私钥。",
            security_key_delete: "删除私钥，用它签发的令牌将失效。",
            security_token_create: "为用户创建访问令牌，可限制有效期和可访问的接口。",
        },
    },

    modal: ModalTexts {
        confirm_remove_title: "删除模型",
        confirm_remove_message: "确定要删除这个模型吗？",
        remove_button: "删除",
        remove_failed: "删除失败",
        close_hint: "按 Esc 或 Enter 关闭",
    },

    status: StatusTexts {
        models_loaded: "模型已加载",
        catalogs_loaded: "目录模型",
        model_removed: "已删除模型",
    },

    help: HelpTexts {
        title: "帮助",
        global: "全局快捷键",
        lists: "模型列表",
        close_hint: "按 Esc 关闭帮助",
    },
};
