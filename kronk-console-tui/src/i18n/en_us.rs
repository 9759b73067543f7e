//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CatalogTableTexts, CommonTexts, HelpTexts, HintTexts, InfoDescriptions,
    InfoTexts, KeyNames, ModalTexts, ModelTableTexts, NavTexts, PageTitles, StatusTexts,
    Translations, WelcomeTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Kronk Console",
        loading: "Loading...",
        cancel: "Cancel",
        close: "Close",
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
            switch_panel: "Switch panel",
            navigate: "Navigate",
            open: "Open",
            select: "Select",
            refresh: "Refresh",
            remove: "Remove",
            back: "Back",
            help: "Help",
            quit: "Quit",
        },
    },

    nav: NavTexts {
        title: "Kronk",
        models: "Models",
        catalog: "Catalog",
        libs: "Libs",
        security: "Security",
        home: "Home",
        list: "List",
        running: "Running",
        pull: "Pull",
        remove: "Remove",
        create_key: "Create Key",
        delete_key: "Delete Key",
        create_token: "Create Token",
    },

    pages: PageTitles {
        home: "Home",
        model_list: "Models",
        model_ps: "Running Models",
        model_pull: "Pull Model",
        model_remove: "Remove Model",
        catalog_list: "Catalog",
        catalog_pull: "Pull From Catalog",
        libs_pull: "Pull Libraries",
        security_key_list: "Private Keys",
        security_key_create: "Create Private Key",
        security_key_delete: "Delete Private Key",
        security_token_create: "Create Token",
    },

    welcome: WelcomeTexts {
        title: "Welcome to Kronk",
        description: "Select an option from the sidebar to manage your models, catalog, and security settings.",
        models: "Local models",
        server: "Server",
        models_dir: "Models directory",
    },

    model_table: ModelTableTexts {
        id: "Model",
        organization: "Organization",
        family: "Family",
        size: "Size",
        modified: "Modified",
        no_models: "No models found in the models directory",
        load_failed: "Unable to read models",
        refreshed_at: "Refreshed at",
        remove_hint: "Select a model and press Enter to remove it",
    },

    catalog_table: CatalogTableTexts {
        catalog: "Catalog",
        model_id: "Model ID",
        pulled: "Pulled",
        endpoint: "Endpoint",
        images: "Images",
        audio: "Audio",
        video: "Video",
        streaming: "Streaming",
        reasoning: "Reasoning",
        tooling: "Tooling",
        yes: "yes",
        no: "no",
        no_catalogs: "No catalogs found, run `kronk catalog update` to download them",
        load_failed: "Unable to read catalogs",
    },

    info: InfoTexts {
        command: "Command",
        server: "Server",
        note: "This operation is performed by the Kronk server.",
        descriptions: InfoDescriptions {
            model_ps: "List the models currently loaded by the server.",
            model_pull: "Download a model file, and optionally its projection file, into the models directory.",
            catalog_pull: "Download a model from the catalog by its catalog ID.",
            libs_pull: "Install or upgrade the llama.cpp libraries for this machine.",
            security_key_list: "List the private keys used to sign access tokens.",
            security_key_create: "Generate a new private key for signing tokens.",
            security_key_delete: "Delete a private key; tokens signed with it stop working.",
            security_token_create: "Create an access token for a user, limited to a duration and a set of endpoints.",
        },
    },

    modal: ModalTexts {
        confirm_remove_title: "Remove Model",
        confirm_remove_message: "Are you sure you want to remove this model?",
        remove_button: "Remove",
        remove_failed: "Remove failed",
        close_hint: "Press Esc or Enter to close",
    },

    status: StatusTexts {
        models_loaded: "Models loaded",
        catalogs_loaded: "Catalog models",
        model_removed: "Removed model",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        lists: "Model lists",
        close_hint: "Press Esc to close the help",
    },
};
