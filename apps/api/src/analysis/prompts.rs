// Career audit prompt. Placeholders are `{name}` style and are filled in a
// single pass by `render_template`, so user text is never re-expanded.

use crate::models::lead::{FormOption, LeadProfile};

pub const AUDITOR_PROMPT_TEMPLATE: &str = r#"You are a Senior Career Auditor at ForeTeach. Your job is to strictly evaluate this student's resume for the role of {target_role}{role_others_suffix}.

**USER PROFILE:**
- Name: {name}
- Email: {email}
- WhatsApp: {whatsapp}
- College: {college}
- Branch: {branch}
- Current Role: {current_role}
- Target Role: {target_role}
- Target Role (if Other): {role_others}
- Confidence Level: {confidence}/5 (If low, they need mentorship)
- Internship Experience: {internship}
- Biggest Pain Point: {pain_point} ({pain_explain})

**YOUR INSTRUCTIONS:**
1. **Score:** Give a strict "Market Readiness Score" out of 100. Be realistic.
2. **The Gap:** Identify 3 specific weaknesses in their resume or skills that will cause rejection.
3. **The ForeTeach Solution:** For EVERY weakness, you MUST recommend a specific "ForeTeach Solution" to fix it.
   - If their resume is weak -> Recommend "ForeTeach Resume Sprint".
   - If they lack DSA/Projects -> Recommend "ForeTeach Capstone Project Cohort".
   - If they struggle with OA/Confidence -> Recommend "ForeTeach 1:1 Mentorship".

**OUTPUT FORMAT (Strict Markdown):**

## 🎯 Market Readiness Score: [Score]/100

## 🚩 Critical Rejection Risks
(List 3 major flaws. Be direct. E.g., "Your project descriptions are too vague for an SDE role.")

## 💡 How ForeTeach Fixes This
| Your Weakness | The ForeTeach Fix |
| :--- | :--- |
| [Weakness 1] | **ForeTeach Project Cohort** (Build industry-grade projects) |
| [Weakness 2] | **ForeTeach Resume Review** (Get shortlisted) |
| [Weakness 3] | **ForeTeach Mock Interviews** (Beat the anxiety) |

## 🚀 Your Personal Roadmap
(Give a 4-week plan. End with: "We can help you execute this faster.")

**RESUME TEXT:**
{resume_text}
"#;

/// Fills the audit template with the profile and resume text.
pub fn compose_prompt(profile: &LeadProfile, resume_text: &str) -> String {
    let role_others_suffix = if profile.role_others.is_empty()
        || profile.role_others == crate::models::lead::ROLE_OTHERS_NOT_APPLICABLE
    {
        String::new()
    } else {
        format!(" ({})", profile.role_others)
    };
    let confidence = profile.confidence.to_string();

    render_template(
        AUDITOR_PROMPT_TEMPLATE,
        &[
            ("name", profile.name.as_str()),
            ("email", profile.email.as_str()),
            ("whatsapp", profile.whatsapp.as_str()),
            ("college", profile.college.as_str()),
            ("branch", profile.branch.as_str()),
            ("current_role", profile.current_role.label()),
            ("target_role", profile.target_role.label()),
            ("role_others", profile.role_others.as_str()),
            ("role_others_suffix", role_others_suffix.as_str()),
            ("confidence", confidence.as_str()),
            ("internship", profile.internship.label()),
            ("pain_point", profile.pain_point.label()),
            ("pain_explain", profile.pain_explain.as_str()),
            ("resume_text", resume_text),
        ],
    )
}

/// Replaces `{key}` with its value in one left-to-right pass.
/// Unknown placeholders and stray braces are copied through unchanged.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let values_len: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + values_len);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match substituted {
            Some((value, close)) => {
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
