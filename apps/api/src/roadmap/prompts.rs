//! Prompt construction for roadmap generation.
//!
//! One template, filled per request from current profile values only — no
//! session state, no caching. The schema block must stay in sync with
//! `models::roadmap::RoadmapPayload`, which is what the extractor parses the
//! response into.

use crate::models::profile::Profile;

/// Token ceiling for a roadmap generation call.
pub const ROADMAP_MAX_TOKENS: u32 = 4000;

/// Roadmap prompt template. Placeholders are filled by
/// [`build_roadmap_prompt`]; the literal braces below are the JSON schema the
/// model must emit, not placeholders.
const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert career coach specializing in tech transitions in Canada. Generate a detailed, personalized learning roadmap for someone transitioning to their target role.

CRITICAL: Pay close attention to the TARGET ROLE and tailor the roadmap specifically for that role. Different roles require different skills:
- "Generative AI Developer" or "AI Application Developer" = Focus on using LLM APIs (OpenAI, Anthropic), prompt engineering, RAG, vector databases, building AI-powered apps
- "Machine Learning Engineer" = Focus on training models, MLOps, model deployment, frameworks like PyTorch/TensorFlow
- "Data Scientist" = Focus on statistics, data analysis, visualization, business insights
- "AI Research Engineer" = Focus on deep learning theory, research papers, implementing algorithms from scratch

Current Profile:
- Current Role: <current_role_title>
- Years of Experience: <years_experience>
- Target Role: <target_role_title>
- Location: <location>
- Current Skills: <skills>
- Education: <education>
- Industry: <industry>
- Additional Context: <additional_info>

IMPORTANT CONTEXT:
- They have <years_experience>+ years as a <current_role_title>
- This means they already know: software development, APIs, databases, deployment, cloud services
- DO NOT teach them basic programming or web development
- Focus on what's NEW and specific to <target_role_title>

For someone targeting "<target_role_title>" specifically:
1. Leverage their existing <current_role_title> skills (they can already build full applications)
2. Focus on AI-specific skills they need to ADD to their toolkit
3. Be practical and project-focused, not theoretical
4. Recommend tools and frameworks they'll actually use in <target_role_title> jobs
5. Include real-world projects they can build to demonstrate competency
6. Consider the <location> job market and what local companies are hiring for

If the target role involves Generative AI/LLMs:
- Focus on: LLM APIs, prompt engineering, RAG systems, vector databases, fine-tuning
- Skip: Training neural networks from scratch, deep learning theory, building transformers
- Projects: Chat applications, document Q&A systems, AI code assistants, content generators

If the target role involves traditional ML:
- Focus on: scikit-learn, model training, feature engineering, MLOps, model deployment
- Include: Some deep learning basics, but only if relevant to the role

Return the roadmap as a JSON object with this exact structure:
{
  "summary": "A 2-3 sentence overview acknowledging their current expertise and the specific path to <target_role_title>",
  "totalWeeks": 16,
  "phases": [
    {
      "name": "Phase name tailored to their journey",
      "duration": "Weeks X-Y",
      "focus": "Specific focus area for this phase"
    }
  ],
  "items": [
    {
      "id": "unique-id-1",
      "title": "Specific, actionable skill title",
      "description": "Detailed description explaining WHY this matters for <target_role_title> and HOW it builds on their existing skills",
      "category": "foundation" | "technical" | "practical" | "career",
      "priority": "high" | "medium" | "low",
      "estimatedWeeks": 2,
      "resources": [
        {
          "title": "Specific resource name",
          "url": "Real, working URL to the resource",
          "type": "course" | "article" | "video" | "book" | "tool",
          "free": true | false
        }
      ]
    }
  ]
}

RESOURCE GUIDELINES:
- Provide REAL, specific resources with actual URLs (not example.com)
- Prioritize free resources (80%+ should be free)
- Include Canadian-specific resources when relevant (Vector Institute, Mila, local meetups)
- Focus on practical, hands-on learning over pure theory
- Include official documentation for tools they'll use

Make it specific, actionable, and encouraging. Include 12-15 roadmap items that are:
- Tailored to <target_role_title> specifically
- Practical and immediately applicable
- Building on their <current_role_title> experience
- Focused on filling the specific gap between current and target role"#;

/// Fills the roadmap template from a validated profile.
pub fn build_roadmap_prompt(profile: &Profile) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace("<current_role_title>", &profile.current_role_title)
        .replace("<years_experience>", &profile.years_experience.to_string())
        .replace("<target_role_title>", &profile.target_role_title)
        .replace("<location>", &profile.location)
        .replace("<skills>", &profile.background.skills.join(", "))
        .replace(
            "<education>",
            profile.background.education.as_deref().unwrap_or("Not specified"),
        )
        .replace(
            "<industry>",
            profile.background.industry.as_deref().unwrap_or("Not specified"),
        )
        .replace(
            "<additional_info>",
            profile.background.additional_info.as_deref().unwrap_or("None"),
        )
}
