use crate::formatter::{MarkdownContent, escape_table_cell};
use crate::types::PullRequestProjectItems;

pub fn pr_items_markdown(project_items: &PullRequestProjectItems) -> MarkdownContent {
    let mut content = String::new();

    // Header
    content.push_str(&format!("# PULL REQUEST: {}\n", project_items.title));
    content.push_str(&format!("node_id: {}\n", project_items.id));
    content.push_str(&format!("state: {}\n\n", project_items.state));

    content.push_str("## project fields\n");
    if project_items.items.is_empty() {
        content.push_str("(No project field values)\n");
        return MarkdownContent(content);
    }

    content.push_str("| Field | Value |\n");
    content.push_str("| --- | --- |\n");
    for item in &project_items.items {
        content.push_str(&format!(
            "| {} | {} |\n",
            escape_table_cell(&item.field_name),
            escape_table_cell(&item.value)
        ));
    }

    MarkdownContent(content)
}
