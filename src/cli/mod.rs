mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_colors, handle_delete, handle_edit, handle_favorite, handle_list, handle_new,
    handle_search, handle_show, EditArgs, NewArgs,
};
