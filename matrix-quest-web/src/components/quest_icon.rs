use matrix_quest_game::QuestIcon;

/// Glyph shown for a quest icon tag.
#[must_use]
pub const fn glyph(icon: QuestIcon) -> &'static str {
    match icon {
        QuestIcon::Server => "🖥️",
        QuestIcon::Shield => "🛡️",
        QuestIcon::Package => "📦",
        QuestIcon::Globe => "🌐",
        QuestIcon::Zap => "⚡",
        QuestIcon::Key => "🔑",
        QuestIcon::User => "👤",
        QuestIcon::MessageSquare => "💬",
        QuestIcon::Trophy => "🏆",
    }
}
