use shared::domain::{Experience, NewsItem, Project, ProjectCard, Skill, SkillCategory};

use crate::{experience, news_item, project, project_card, skill};

pub(crate) fn experiences() -> Vec<Experience> {
    vec![
        experience(
            1,
            "AngelOne",
            "Software Engineer 2",
            "2024 - Present",
            95,
            [
                "Built analytics platform for 190K+ users",
                "Improved Core Web Vitals by 41%",
                "Led Svelte 5 migration for 10+ modules",
            ],
        ),
        experience(
            2,
            "Innovaccer",
            "Software Engineer 2",
            "2021 - 2024",
            88,
            [
                "Led PRM tool development end-to-end",
                "Built Smart Assist with OpenAI APIs",
                "Mentored 2 developers with comprehensive training",
            ],
        ),
        experience(
            3,
            "Internshala",
            "Software Developer",
            "2020 - 2021",
            82,
            [
                "Developed JOS product contributing 5% revenue",
                "Increased enrollment rates by 22.56%",
                "Boosted certificate shares from 30% to 45.62%",
            ],
        ),
    ]
}

pub(crate) fn skills() -> Vec<Skill> {
    vec![
        skill(1, "React", 93, SkillCategory::Frontend),
        skill(2, "JavaScript", 95, SkillCategory::Frontend),
        skill(3, "Svelte", 90, SkillCategory::Frontend),
        skill(4, "TypeScript", 88, SkillCategory::Frontend),
        skill(5, "Node.js", 85, SkillCategory::Backend),
        skill(6, "CSS/Tailwind", 92, SkillCategory::Frontend),
    ]
}

pub(crate) fn project_cards() -> Vec<ProjectCard> {
    vec![
        project_card(1, "Trading Analytics", "190K+ Users", "card-mint", "📊"),
        project_card(2, "Performance Boost", "41% Faster", "card-yellow", "🚀"),
        project_card(3, "Smart Assist AI", "18% Engagement", "card-purple", "🤖"),
        project_card(4, "Enrollment Growth", "22.56% Increase", "card-coral", "📈"),
        project_card(5, "Module Migration", "10+ Modules", "card-blue", "🔄"),
        project_card(6, "Revenue Impact", "5% Monthly", "card-green", "💰"),
    ]
}

pub(crate) fn news_items() -> Vec<NewsItem> {
    vec![
        news_item(
            1,
            "AngelOne Platform",
            "Trading Analytics Platform",
            "Built for 190K+ monthly active users",
            "card-coral",
        ),
        news_item(
            2,
            "Performance Expert",
            "Core Web Vitals",
            "41% improvement in FCP, LCP, CRP",
            "card-blue",
        ),
        news_item(
            3,
            "AI Integration",
            "Smart Assist Feature",
            "18% increase in user engagement",
            "card-green",
        ),
        news_item(
            4,
            "Team Leadership",
            "Mentorship & Guidance",
            "Led and mentored 2 developers",
            "card-purple",
        ),
    ]
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        project(1, "AngelOne Trading Platform", "2024", "#"),
        project(2, "Patient Relations Management", "2023", "#"),
        project(3, "Smart Assist AI", "2022", "#"),
        project(4, "Job Oriented Specialization", "2021", "#"),
        project(5, "Micro Frontend Architecture", "2022", "#"),
    ]
}
