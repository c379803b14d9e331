//! Built-in catalog content served when no `CATALOG_PATH` is configured.

use crate::models::career::{CareerCategory, CareerRecord};
use crate::models::quiz::{QuizOption, QuizQuestion};
use crate::models::resource::{ResourceRecord, ResourceType};

#[allow(clippy::too_many_arguments)]
fn career(
    id: &str,
    title: &str,
    category: CareerCategory,
    description: &str,
    salary_range: &str,
    education: &str,
    skills: &[&str],
    image_url: &str,
) -> CareerRecord {
    CareerRecord {
        id: id.to_string(),
        title: title.to_string(),
        category,
        description: description.to_string(),
        salary_range: salary_range.to_string(),
        education: education.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        image_url: image_url.to_string(),
    }
}

pub fn careers() -> Vec<CareerRecord> {
    use CareerCategory::*;

    vec![
        career(
            "software-engineer",
            "Software Engineer",
            Technology,
            "Design, build, and maintain applications and services that power modern products.",
            "$95k - $160k",
            "Bachelor's in Computer Science or equivalent experience",
            &["JavaScript", "Python", "System Design", "Cloud Platforms"],
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "data-scientist",
            "Data Scientist",
            Technology,
            "Turn raw data into models and insights that guide product and business strategy.",
            "$100k - $170k",
            "Master's in Statistics, Computer Science, or a related field",
            &["Python", "Machine Learning", "SQL", "Data Visualization"],
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "registered-nurse",
            "Registered Nurse",
            Healthcare,
            "Provide and coordinate patient care while educating patients and families about health conditions.",
            "$70k - $110k",
            "Bachelor of Science in Nursing and RN licensure",
            &["Patient Care", "Critical Thinking", "Communication", "Empathy"],
            "https://images.unsplash.com/photo-1584515933487-779824d29309?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "physical-therapist",
            "Physical Therapist",
            Healthcare,
            "Help patients recover mobility and manage pain through tailored movement programs.",
            "$80k - $105k",
            "Doctor of Physical Therapy and state licensure",
            &["Anatomy", "Rehabilitation Planning", "Communication", "Empathy"],
            "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "ux-designer",
            "UX Designer",
            Creative,
            "Research user needs and craft intuitive, accessible interfaces across devices.",
            "$85k - $135k",
            "Bachelor's in Design, HCI, or a strong portfolio",
            &["User Research", "Prototyping", "Visual Design", "Accessibility"],
            "https://images.unsplash.com/photo-1561070791-2526d30994b5?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "content-strategist",
            "Content Strategist",
            Creative,
            "Plan and shape brand narratives that connect audiences with products and ideas.",
            "$65k - $110k",
            "Bachelor's in Communications, Journalism, or Marketing",
            &["Storytelling", "SEO", "Editorial Planning", "Communication"],
            "https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "business-analyst",
            "Business Analyst",
            Business,
            "Bridge stakeholders and delivery teams by translating business goals into clear requirements.",
            "$75k - $120k",
            "Bachelor's in Business, Economics, or Information Systems",
            &["Data Analysis", "SQL", "Stakeholder Management", "Process Mapping"],
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "instructional-designer",
            "Instructional Designer",
            Education,
            "Create engaging learning experiences and curricula for schools and organisations.",
            "$60k - $95k",
            "Master's in Instructional Design or Education",
            &["Curriculum Development", "E-Learning Tools", "Assessment Design", "Communication"],
            "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?auto=format&fit=crop&w=800&q=60",
        ),
        career(
            "civil-engineer",
            "Civil Engineer",
            Engineering,
            "Plan, design, and oversee infrastructure projects such as roads, bridges, and water systems.",
            "$75k - $125k",
            "Bachelor's in Civil Engineering and PE licensure",
            &["AutoCAD", "Structural Analysis", "Project Management", "Problem Solving"],
            "https://images.unsplash.com/photo-1503387762-592deb58ef4e?auto=format&fit=crop&w=800&q=60",
        ),
    ]
}

fn resource(
    id: &str,
    title: &str,
    description: &str,
    url: &str,
    resource_type: ResourceType,
) -> ResourceRecord {
    ResourceRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        resource_type,
    }
}

pub fn resources() -> Vec<ResourceRecord> {
    vec![
        resource(
            "resume-guide",
            "Crafting a Standout Resume",
            "A step-by-step guide to highlighting achievements and tailoring your resume for each role.",
            "https://www.themuse.com/advice/how-to-make-a-resume-examples",
            ResourceType::Guide,
        ),
        resource(
            "interview-video",
            "Mastering Behavioral Interviews",
            "Learn the STAR method and practice answers to the most common behavioral questions.",
            "https://www.youtube.com/watch?v=PJKYqLP6MRE",
            ResourceType::Video,
        ),
        resource(
            "career-change-article",
            "Navigating a Mid-Career Pivot",
            "Practical strategies for identifying transferable skills and moving into a new field.",
            "https://hbr.org/2020/05/how-to-change-careers-midstream",
            ResourceType::Article,
        ),
        resource(
            "networking-guide",
            "Networking Without the Awkwardness",
            "Build genuine professional relationships through informational interviews and communities.",
            "https://www.linkedin.com/business/talent/blog/talent-connect/networking-tips",
            ResourceType::Guide,
        ),
        resource(
            "salary-negotiation-video",
            "Negotiating Your Salary with Confidence",
            "A walkthrough of research, framing, and counter-offer tactics for compensation talks.",
            "https://www.youtube.com/watch?v=XY5SeWUDfzM",
            ResourceType::Video,
        ),
        resource(
            "upskilling-article",
            "Choosing the Right Upskilling Path",
            "Compare bootcamps, certificates, and degree programs to find the best fit for your goals.",
            "https://www.coursera.org/articles/upskilling",
            ResourceType::Article,
        ),
    ]
}

fn option(label: &str, category: CareerCategory, description: &str) -> QuizOption {
    QuizOption {
        label: label.to_string(),
        category,
        description: description.to_string(),
    }
}

pub fn questions() -> Vec<QuizQuestion> {
    use CareerCategory::*;

    vec![
        QuizQuestion {
            id: "strength".to_string(),
            prompt: "Which activity feels most energizing to you?".to_string(),
            options: vec![
                option(
                    "Designing digital products or experiences",
                    Creative,
                    "You enjoy crafting visuals, interfaces, and storytelling.",
                ),
                option(
                    "Solving complex technical challenges",
                    Technology,
                    "You thrive when building systems and improving code.",
                ),
                option(
                    "Helping people improve their well-being",
                    Healthcare,
                    "You love supporting others through care and empathy.",
                ),
                option(
                    "Analyzing data to guide business decisions",
                    Business,
                    "You excel at interpreting trends and influencing growth.",
                ),
            ],
        },
        QuizQuestion {
            id: "environment".to_string(),
            prompt: "What type of work environment do you prefer?".to_string(),
            options: vec![
                option(
                    "Collaborating in cross-functional digital teams",
                    Technology,
                    "You like fast-paced, iterative work styles.",
                ),
                option(
                    "Hands-on settings with direct impact on people",
                    Healthcare,
                    "You value personal connection and tangible outcomes.",
                ),
                option(
                    "Structured environments focused on learning and growth",
                    Education,
                    "You enjoy guiding others and continuous improvement.",
                ),
                option(
                    "Fieldwork combining planning and on-site execution",
                    Engineering,
                    "You appreciate building things that last.",
                ),
            ],
        },
        QuizQuestion {
            id: "skills".to_string(),
            prompt: "Which skills would you love to use daily?".to_string(),
            options: vec![
                option(
                    "Empathy, communication, and active listening",
                    Healthcare,
                    "You are drawn to understanding and helping people.",
                ),
                option(
                    "Logic, coding, and system architecture",
                    Technology,
                    "You enjoy translating ideas into technical solutions.",
                ),
                option(
                    "Visual storytelling and prototyping",
                    Creative,
                    "You are inspired by crafting narratives and visuals.",
                ),
                option(
                    "Strategic planning and stakeholder alignment",
                    Business,
                    "You can see the big picture and drive initiatives.",
                ),
            ],
        },
        QuizQuestion {
            id: "impact".to_string(),
            prompt: "How do you want your work to make an impact?".to_string(),
            options: vec![
                option(
                    "Empower future generations through education",
                    Education,
                    "You want to inspire and equip learners.",
                ),
                option(
                    "Innovate solutions that scale globally",
                    Technology,
                    "You aim to influence how people live and work.",
                ),
                option(
                    "Improve health outcomes and quality of life",
                    Healthcare,
                    "You are motivated by compassionate care.",
                ),
                option(
                    "Design resilient infrastructure and systems",
                    Engineering,
                    "You want to shape the spaces communities rely on.",
                ),
            ],
        },
    ]
}
