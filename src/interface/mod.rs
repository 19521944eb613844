pub mod export;
pub mod prompts;
pub mod render;
pub mod session;

pub use export::{breakdown_json, write_breakdown_csv};
pub use prompts::{
    prompt_filter, prompt_recipe, prompt_recipe_choice, prompt_recipe_selection,
    prompt_scale_factor, prompt_yes_no,
};
pub use render::{display_breakdown, display_recipe, display_recipe_list};
pub use session::{run_session, MenuAction};
