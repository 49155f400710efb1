use crate::models::DayInfo;

pub const SYSTEM_PROMPT: &str = "You are an expert AI instructor who writes daily programming \
insight posts for beginners. Always reply with valid Markdown that is professional, concise, and \
aligned with the provided outline. Never include extra sections or commentary.";

// Static template text must not mention any scheduled language or day name;
// those only enter through the placeholders, once each.
const USER_PROMPT_TEMPLATE: &str = r#"Create today's GitHub Discussion post for the Daily Programming Insight series.

Date: {date}
Day: {day}
Scheduled Language: {language}

Post structure and formatting
1. Introduction — 1-2 sentences introducing yourself as the AI assistant.
2. Topic Preview — Clearly state the specific concept or technique covered today.
3. Fun Fact — 2-4 sentences about the scheduled language, including year or origin context.
4. Tips/Notes — Provide exactly 1-2 practical syntax tips, functions, or features of the scheduled language.
5. Code Snippet — Provide a runnable example that demonstrates the concept. Use a fenced code block tagged with the lowercase name of the scheduled language. The snippet must be 30-50 lines, beginner-friendly yet intermediate in difficulty, idiomatic for the scheduled language, with helpful inline comments.
6. Explanation — Offer a step-by-step breakdown of how the code works, why the concept matters, and practical use cases. Use numbered steps.
7. Sources — If you referenced any external material, cite the links in Markdown list format. If not, output "Sources: None".

Additional requirements
- Maintain a professional, concise, beginner-friendly tone.
- Never add sections beyond the list above.
- Always produce valid Markdown.
- On wildcard days you may pick any language, including niche or emerging ones, but keep the exact structure above.
- Topic Preview, Fun Fact, and Tips must all relate to the scheduled language.

Return only the finished Markdown post with the seven sections in the order listed."#;

pub fn build_user_prompt(day_info: &DayInfo) -> String {
    USER_PROMPT_TEMPLATE
        .replace("{date}", &day_info.date)
        .replace("{day}", &day_info.day_name)
        .replace("{language}", &day_info.language)
}

pub fn build_title(day_info: &DayInfo) -> String {
    format!(
        "Daily Programming Insight — {} ({})",
        day_info.date, day_info.day_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::day_info_for;
    use time::macros::datetime;

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn prompt_embeds_date_day_and_language_exactly_once() {
        // One instant per weekday, Sunday through Saturday.
        let sunday = datetime!(2025-06-01 12:00 UTC);
        for offset in 0..7 {
            let info = day_info_for(sunday + time::Duration::days(offset));
            let prompt = build_user_prompt(&info);

            assert_eq!(occurrences(&prompt, &info.date), 1, "date for {}", info.day_name);
            assert_eq!(occurrences(&prompt, &info.day_name), 1, "day {}", info.day_name);
            assert_eq!(
                occurrences(&prompt, &info.language),
                1,
                "language for {}",
                info.day_name
            );
        }
    }

    #[test]
    fn prompt_lists_sections_in_fixed_order() {
        let info = day_info_for(datetime!(2025-06-02 12:00 UTC));
        let prompt = build_user_prompt(&info);

        let sections = [
            "1. Introduction",
            "2. Topic Preview",
            "3. Fun Fact",
            "4. Tips/Notes",
            "5. Code Snippet",
            "6. Explanation",
            "7. Sources",
        ];

        let mut last = 0;
        for section in sections {
            let position = prompt
                .find(section)
                .unwrap_or_else(|| panic!("prompt is missing section {:?}", section));
            assert!(position > last, "section {:?} is out of order", section);
            last = position;
        }

        assert!(prompt.contains("\"Sources: None\""));
    }

    #[test]
    fn prompt_has_no_unresolved_placeholders() {
        let info = day_info_for(datetime!(2025-06-02 12:00 UTC));
        let prompt = build_user_prompt(&info);
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains('}'));
    }

    #[test]
    fn title_carries_date_and_day_name() {
        let info = day_info_for(datetime!(2025-06-02 12:00 UTC));
        assert_eq!(
            build_title(&info),
            "Daily Programming Insight — 2025-06-02 (Monday)"
        );
    }
}
