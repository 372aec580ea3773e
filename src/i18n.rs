//! Message Catalog
//!
//! Default English text for every user-visible string, keyed by message id.

const MESSAGES: &[(&str, &str)] = &[
    // Public board
    ("roadmap.title", "Roadmap"),
    ("roadmap.description", "Track the progress of feature requests and see what's coming next."),
    ("roadmap.loading", "Loading roadmap..."),
    ("roadmap.empty", "No roadmap columns have been configured yet."),
    ("roadmap.error.loading", "Failed to load roadmap"),
    ("roadmap.column.empty", "No posts in this column"),
    ("roadmap.card.remove", "Remove from roadmap"),
    ("roadmap.card.move.previous", "Move to previous column"),
    ("roadmap.card.move.next", "Move to next column"),
    ("roadmap.card.move.up", "Move up"),
    ("roadmap.card.move.down", "Move down"),
    // Assignment modal
    ("roadmap.modal.title", "Assign to Roadmap"),
    ("roadmap.modal.description", "Choose which roadmap column this post should be assigned to."),
    ("roadmap.modal.column.label", "Roadmap Column"),
    ("roadmap.modal.column.placeholder", "Select a column"),
    ("roadmap.modal.post.info", "Post: {title}"),
    ("roadmap.modal.cancel", "Cancel"),
    ("roadmap.modal.remove", "Remove from Roadmap"),
    ("roadmap.modal.assign", "Assign to Roadmap"),
    ("roadmap.modal.open", "Roadmap"),
    ("roadmap.panel.current", "On roadmap: {column}"),
    ("roadmap.panel.none", "Not on the roadmap"),
    ("roadmap.modal.error.loading", "Failed to load roadmap columns"),
    ("roadmap.modal.error.assigning", "Failed to assign post to roadmap"),
    ("roadmap.modal.error.removing", "Failed to remove post from roadmap"),
    // Admin page
    ("admin.roadmap.title", "Manage Roadmap"),
    ("admin.roadmap.description", "Configure roadmap columns and their visibility settings."),
    ("admin.roadmap.loading", "Loading roadmap columns..."),
    ("admin.roadmap.empty", "No roadmap columns configured yet."),
    ("admin.roadmap.create", "Create New Column"),
    ("admin.roadmap.create.title", "Create New Column"),
    ("admin.roadmap.create.button", "Create Column"),
    ("admin.roadmap.edit", "Edit"),
    ("admin.roadmap.edit.title", "Edit Column"),
    ("admin.roadmap.save", "Save Changes"),
    ("admin.roadmap.cancel", "Cancel"),
    ("admin.roadmap.delete", "Delete"),
    ("admin.roadmap.move.up", "Move up"),
    ("admin.roadmap.move.down", "Move down"),
    ("admin.roadmap.name.label", "Column Name"),
    ("admin.roadmap.name.placeholder", "e.g., In Progress"),
    ("admin.roadmap.public.label", "Visible to public"),
    ("admin.roadmap.public.help", "Public columns are visible to all users. Private columns are only visible to staff members."),
    ("admin.roadmap.position", "Position: {position}"),
    ("admin.roadmap.public", "Public"),
    ("admin.roadmap.private", "Private"),
    ("admin.roadmap.confirm.delete", "Delete \"{name}\"? This will remove all posts from this column."),
    ("admin.roadmap.error.loading", "Failed to load roadmap columns"),
    ("admin.roadmap.error.creating", "Failed to create roadmap column"),
    ("admin.roadmap.error.updating", "Failed to update roadmap column"),
    ("admin.roadmap.error.deleting", "Failed to delete roadmap column"),
    ("admin.roadmap.error.reordering", "Failed to reorder roadmap columns"),
];

/// Look up a message; unknown ids render as the id itself
pub fn t(id: &str) -> String {
    MESSAGES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Look up a message and substitute `{name}` placeholders in one pass.
/// Substituted values are not scanned again; unknown placeholders stay as written.
pub fn t_with(id: &str, args: &[(&str, &str)]) -> String {
    let template = t(id);
    let mut out = String::with_capacity(template.len());
    let mut rest = template.as_str();
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after
            .find('}')
            .and_then(|close| args.iter().find(|(name, _)| *name == &after[..close]).map(|(_, v)| (close, *v)));
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
