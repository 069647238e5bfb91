// Prompt template for job description generation.
// User text is inserted verbatim: no escaping, no length cap.

use crate::generation::request::JobPosting;

/// Replace every `{placeholder}` before sending.
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = "\
This {engagement_type} role is open in {location}.
Position: {position}
Hours: {hours}, {time_zone}
Rate: {pay_rate}

Role Overview: Generate a description based on the responsibilities provided.
About the client: {company_overview}

Key Responsibilities:
{responsibilities}

Requirements:
{requirements}

Benefits:
{benefits}
";

/// Renders the prompt for a validated posting.
pub fn build_prompt(posting: &JobPosting) -> String {
    // Single pass so a placeholder-looking string inside user text is left alone.
    let mut prompt = String::with_capacity(JOB_DESCRIPTION_PROMPT_TEMPLATE.len() + 256);
    let mut rest = JOB_DESCRIPTION_PROMPT_TEMPLATE;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        prompt.push_str(&rest[..start]);
        match field(posting, name) {
            Some(value) => prompt.push_str(value),
            None => prompt.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    prompt.push_str(rest);
    prompt
}

fn field<'a>(posting: &'a JobPosting, name: &str) -> Option<&'a str> {
    let value = match name {
        "location" => &posting.location,
        "position" => &posting.position,
        "engagement_type" => &posting.engagement_type,
        "hours" => &posting.hours,
        "time_zone" => &posting.time_zone,
        "pay_rate" => &posting.pay_rate,
        "responsibilities" => &posting.responsibilities,
        "requirements" => &posting.requirements,
        "benefits" => &posting.benefits,
        "company_overview" => &posting.company_overview,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clerk_posting() -> JobPosting {
        JobPosting {
            location: "Remote".to_string(),
            position: "Data Entry Clerk".to_string(),
            engagement_type: "part-time".to_string(),
            hours: "20hrs/week".to_string(),
            time_zone: "EST".to_string(),
            pay_rate: "$15/hr".to_string(),
            responsibilities: "Enter data".to_string(),
            requirements: "Typing speed 40wpm".to_string(),
            benefits: "Flexible hours".to_string(),
            company_overview: "A small logistics firm".to_string(),
        }
    }

    #[test]
    fn test_prompt_matches_template_exactly() {
        let expected = "This part-time role is open in Remote.\n\
            Position: Data Entry Clerk\n\
            Hours: 20hrs/week, EST\n\
            Rate: $15/hr\n\
            \n\
            Role Overview: Generate a description based on the responsibilities provided.\n\
            About the client: A small logistics firm\n\
            \n\
            Key Responsibilities:\nEnter data\n\
            \n\
            Requirements:\nTyping speed 40wpm\n\
            \n\
            Benefits:\nFlexible hours\n";
        assert_eq!(build_prompt(&clerk_posting()), expected);
    }

    #[test]
    fn test_multiline_blocks_are_inserted_verbatim() {
        let mut posting = clerk_posting();
        posting.responsibilities = "- Enter data\n- Verify records".to_string();
        let prompt = build_prompt(&posting);
        assert!(prompt.contains("Key Responsibilities:\n- Enter data\n- Verify records\n\nRequirements:"));
    }

    #[test]
    fn test_braces_in_user_text_are_not_expanded() {
        let mut posting = clerk_posting();
        posting.location = "{position}".to_string();
        posting.benefits = "Stock {options".to_string();
        let prompt = build_prompt(&posting);
        assert!(prompt.starts_with("This part-time role is open in {position}.\n"));
        assert!(prompt.ends_with("Benefits:\nStock {options\n"));
    }

    #[test]
    fn test_every_placeholder_is_filled() {
        let prompt = build_prompt(&clerk_posting());
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains('}'));
    }
}
