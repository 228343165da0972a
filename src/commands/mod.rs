pub type CmdResult<T> = siteprep::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod pages;
pub mod prepare;

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (siteprep::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Prepare(args) => {
            crate::output::response::map_cmd_result_to_json(prepare::run(args, global))
        }
        crate::Commands::Pages(args) => {
            crate::output::response::map_cmd_result_to_json(pages::run(args, global))
        }
    }
}
