use genopts_compiler::TemplateBuilder;
use genopts_compiler::pattern::Template;

use super::Input;
use super::loader::{fail, load_or_exit};

pub struct TreeArgs {
    pub input: Input,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let source_map = load_or_exit(&args.input);

    let parsed = match TemplateBuilder::new(source_map.clone()).parse() {
        Ok(parsed) => parsed,
        Err(err) => fail(err, &source_map, args.color),
    };

    match render_tree(parsed.template(), args.json) {
        Ok(out) => println!("{}", out),
        Err(err) => {
            eprintln!("error: failed to serialize tree: {}", err);
            std::process::exit(1);
        }
    }
}

pub fn render_tree(template: &Template, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(template)
    } else {
        Ok(template.dump())
    }
}
