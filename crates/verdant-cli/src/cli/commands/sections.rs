use verdant_core::SECTIONS;

use crate::exit_codes::SUCCESS;

pub fn run() -> anyhow::Result<i32> {
    print!("{}", format_sections());
    Ok(SUCCESS)
}

fn format_sections() -> String {
    let mut s = String::new();
    for (idx, section) in SECTIONS.iter().enumerate() {
        s.push_str(&format!(
            "{}. {} {} ({})\n",
            idx + 1,
            section.icon,
            section.title,
            section.id
        ));
        for artifact in section.artifacts() {
            s.push_str(&format!("     {}\n", artifact));
        }
    }
    s
}
