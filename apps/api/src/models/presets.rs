//! Fully populated sample résumés offered as starting points.

use crate::models::resume::{
    Education, Experience, PersonalInfo, Project, Resume, Template,
};

const NAMES: [&str; 5] = [
    "Software Engineer",
    "Marketing Manager",
    "Executive",
    "Graphic Designer",
    "Project Manager",
];

/// Preset names in display order.
pub fn names() -> &'static [&'static str] {
    &NAMES
}

/// Returns a fresh copy of the named preset.
pub fn by_name(name: &str) -> Option<Resume> {
    match name {
        "Software Engineer" => Some(software_engineer()),
        "Marketing Manager" => Some(marketing_manager()),
        "Executive" => Some(executive()),
        "Graphic Designer" => Some(graphic_designer()),
        "Project Manager" => Some(project_manager()),
        _ => None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn personal(
    full_name: &str,
    email: &str,
    phone: &str,
    address: &str,
    website: &str,
    objective: &str,
) -> PersonalInfo {
    PersonalInfo {
        full_name: full_name.into(),
        email: email.into(),
        phone: phone.into(),
        address: address.into(),
        website: website.into(),
        objective: objective.into(),
    }
}

fn experience(
    id: &str,
    company: &str,
    position: &str,
    start: &str,
    end: &str,
    description: &str,
) -> Experience {
    Experience {
        id: id.into(),
        company: company.into(),
        position: position.into(),
        start_date: start.into(),
        end_date: end.into(),
        description: description.into(),
    }
}

fn education(
    id: &str,
    school: &str,
    degree: &str,
    start: &str,
    end: &str,
    description: &str,
) -> Education {
    Education {
        id: id.into(),
        school: school.into(),
        degree: degree.into(),
        start_date: start.into(),
        end_date: end.into(),
        description: description.into(),
    }
}

fn project(id: &str, name: &str, description: &str, link: &str) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        link: link.into(),
    }
}

fn software_engineer() -> Resume {
    Resume {
        template: Template::Modern,
        personal_info: personal(
            "Alex Rivera",
            "alex.rivera@tech.com",
            "+1 (555) 012-3456",
            "San Francisco, CA",
            "github.com/arivera",
            "Senior Software Engineer with 10+ years of experience in full-stack development. \
             Expert in React, Node.js, and distributed systems. Passionate about building \
             scalable, high-performance web applications.",
        ),
        experience: vec![
            experience(
                "1",
                "Tech Giant Corp",
                "Senior Software Engineer",
                "2018",
                "Present",
                "• Led a team of 12 engineers to rebuild the core checkout flow, increasing conversion by 15%.\n\
                 • Optimized database queries, reducing latency by 40% across the platform.",
            ),
            experience(
                "2",
                "Startup Hub",
                "Full Stack Developer",
                "2014",
                "2018",
                "• Developed and maintained multiple client-facing React applications.\n\
                 • Implemented CI/CD pipelines, reducing deployment time by 50%.",
            ),
        ],
        education: vec![education(
            "1",
            "Stanford University",
            "B.S. in Computer Science",
            "2010",
            "2014",
            "GPA: 3.9/4.0",
        )],
        skills: strings(&["React", "TypeScript", "Node.js", "PostgreSQL", "AWS", "Docker"]),
        projects: vec![project(
            "1",
            "Open Source UI Kit",
            "A highly accessible UI component library with 5k+ stars on GitHub.",
            "github.com/arivera/ui-kit",
        )],
        certifications: strings(&[
            "AWS Certified Solutions Architect",
            "Google Cloud Professional Engineer",
        ]),
    }
}

fn marketing_manager() -> Resume {
    Resume {
        template: Template::Creative,
        personal_info: personal(
            "Sarah Chen",
            "sarah.chen@marketing.io",
            "+1 (555) 987-6543",
            "New York, NY",
            "sarahchen.design",
            "Creative Marketing Manager with a track record of driving brand growth through \
             data-driven strategies and innovative campaigns. Specialized in digital storytelling \
             and cross-functional leadership.",
        ),
        experience: vec![experience(
            "1",
            "Global Brands Inc",
            "Marketing Manager",
            "2019",
            "Present",
            "• Managed a $2M annual marketing budget, achieving 25% YoY growth in brand awareness.\n\
             • Orchestrated a multi-channel campaign that reached 5M+ unique users.",
        )],
        education: vec![education(
            "1",
            "NYU Stern",
            "MBA in Marketing",
            "2017",
            "2019",
            "Dean's List",
        )],
        skills: strings(&[
            "Brand Strategy",
            "SEO/SEM",
            "Content Marketing",
            "Data Analytics",
            "Adobe Creative Suite",
        ]),
        projects: vec![project(
            "1",
            "Rebrand 2022",
            "Led the complete visual and strategic rebranding for a Fortune 500 client.",
            "behance.net/sarahchen",
        )],
        certifications: strings(&["Google Ads Certified", "HubSpot Content Marketing"]),
    }
}

fn executive() -> Resume {
    Resume {
        template: Template::Executive,
        personal_info: personal(
            "Michael Sterling",
            "m.sterling@executive.com",
            "+1 (555) 111-2222",
            "Chicago, IL",
            "linkedin.com/in/msterling",
            "Visionary Chief Operating Officer with 20 years of experience in scaling global \
             operations. Proven ability to drive profitability, streamline processes, and lead \
             high-performing executive teams.",
        ),
        experience: vec![experience(
            "1",
            "Apex Global",
            "COO",
            "2015",
            "Present",
            "• Oversaw global operations across 15 countries, increasing operational efficiency by 30%.\n\
             • Led a successful $500M acquisition and integration project.",
        )],
        education: vec![education(
            "1",
            "Harvard Business School",
            "MBA",
            "2005",
            "2007",
            "Focus on Global Operations",
        )],
        skills: strings(&[
            "Strategic Planning",
            "Operations Management",
            "M&A",
            "P&L Responsibility",
            "Executive Leadership",
        ]),
        projects: vec![],
        certifications: strings(&["Certified Management Accountant (CMA)"]),
    }
}

fn graphic_designer() -> Resume {
    Resume {
        template: Template::Minimal,
        personal_info: personal(
            "Elena Rossi",
            "elena@rossi.design",
            "+1 (555) 333-4444",
            "Milan, Italy",
            "rossi.design",
            "Award-winning Graphic Designer with a focus on minimalist aesthetics and functional \
             design. Expert in typography, branding, and user interface design.",
        ),
        experience: vec![experience(
            "1",
            "Studio Minimal",
            "Senior Designer",
            "2020",
            "Present",
            "• Developed visual identities for 50+ international brands.\n\
             • Won the Red Dot Design Award 2022 for innovative packaging design.",
        )],
        education: vec![education(
            "1",
            "Politecnico di Milano",
            "B.A. in Visual Design",
            "2016",
            "2020",
            "Graduated with Honors",
        )],
        skills: strings(&["Typography", "Branding", "UI/UX", "Figma", "Illustrator", "InDesign"]),
        projects: vec![project(
            "1",
            "Typeface \"Aura\"",
            "Designed a custom geometric sans-serif typeface used by 10k+ designers.",
            "fonts.com/aura",
        )],
        certifications: vec![],
    }
}

fn project_manager() -> Resume {
    Resume {
        template: Template::Classic,
        personal_info: personal(
            "David Miller",
            "david.miller@pmp.com",
            "+1 (555) 555-6666",
            "Austin, TX",
            "pmp-david.com",
            "PMP-certified Project Manager with 7 years of experience in the construction and \
             engineering sectors. Expert in risk management, stakeholder communication, and \
             on-time delivery.",
        ),
        experience: vec![experience(
            "1",
            "BuildRight Engineering",
            "Lead Project Manager",
            "2017",
            "Present",
            "• Managed $50M+ infrastructure projects from inception to completion.\n\
             • Reduced project overhead by 12% through improved resource allocation.",
        )],
        education: vec![education(
            "1",
            "UT Austin",
            "B.S. in Civil Engineering",
            "2012",
            "2016",
            "President of Engineering Society",
        )],
        skills: strings(&[
            "Agile/Scrum",
            "Risk Management",
            "Stakeholder Management",
            "MS Project",
            "Budgeting",
        ]),
        projects: vec![project(
            "1",
            "City Bridge Project",
            "Led the $20M reconstruction of the historic city bridge ahead of schedule.",
            "",
        )],
        certifications: strings(&["PMP Certified", "Prince2 Practitioner"]),
    }
}
