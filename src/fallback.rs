//! Static substitute datasets shown when a remote read fails, keeping
//! every page populated in degraded/offline mode. The same records
//! seed the in-memory store for demo deployments.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Category, Comment, ContactMessage, Project, Rating};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn project(
    id: &str,
    title: &str,
    category: Category,
    description: &str,
    image: &str,
    featured: bool,
    created_at: DateTime<Utc>,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category,
        description: description.to_string(),
        image: image.to_string(),
        images: String::new(),
        featured,
        created_at,
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-Commerce Platform",
            Category::Web,
            "A modern e-commerce platform built with React and Node.js, featuring real-time inventory management and secure payment processing. This project showcases advanced web development techniques including state management, API integration, and responsive design.",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=300&fit=crop",
            true,
            date(2024, 1, 15),
        ),
        project(
            "2",
            "Mobile Banking App",
            Category::Mobile,
            "A secure mobile banking application with biometric authentication and real-time transaction monitoring. Built with React Native and integrated with banking APIs for secure financial transactions.",
            "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=400&h=300&fit=crop",
            true,
            date(2024, 2, 20),
        ),
        project(
            "3",
            "Portfolio Website Design",
            Category::Design,
            "A clean and modern portfolio website design with smooth animations and responsive layout. Created using Figma and implemented with modern CSS techniques and JavaScript interactions.",
            "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=400&h=300&fit=crop",
            true,
            date(2024, 3, 10),
        ),
        project(
            "4",
            "Task Management System",
            Category::Fullstack,
            "A comprehensive task management system with team collaboration features and project tracking. Built with MERN stack featuring real-time updates, file sharing, and team communication tools.",
            "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=300&fit=crop",
            false,
            date(2024, 4, 5),
        ),
        project(
            "5",
            "Restaurant Ordering App",
            Category::Mobile,
            "A mobile app for restaurant ordering with real-time order tracking and payment integration. Features include menu browsing, custom orders, delivery tracking, and multiple payment options.",
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=400&h=300&fit=crop",
            false,
            date(2024, 5, 12),
        ),
        project(
            "6",
            "Analytics Dashboard",
            Category::Web,
            "A data visualization dashboard with interactive charts and real-time analytics. Built with D3.js and Chart.js for comprehensive data analysis and business intelligence reporting.",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop",
            false,
            date(2024, 6, 18),
        ),
        project(
            "7",
            "Social Media App",
            Category::Mobile,
            "A social media application with photo sharing, stories, and messaging features. Built with React Native for real-time communication and content sharing.",
            "https://images.unsplash.com/photo-1611162616475-46b635cb6868?w=400&h=300&fit=crop",
            false,
            date(2024, 7, 22),
        ),
        project(
            "8",
            "E-Learning Platform",
            Category::Web,
            "An online learning platform with video streaming, quizzes, and progress tracking. Features include course management, student dashboards, and instructor tools.",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=400&h=300&fit=crop",
            false,
            date(2024, 8, 15),
        ),
    ]
}

pub fn featured_projects() -> Vec<Project> {
    projects().into_iter().filter(|p| p.featured).take(3).collect()
}

/// Canned stand-in for a detail page whose project read failed. The
/// requested id is kept so links on the page stay coherent.
pub fn project_detail(id: &str) -> Project {
    let mut project = projects().remove(0);
    project.id = id.to_string();
    project.images = [
        "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
    ]
    .join(",");
    project
}

pub fn comments() -> Vec<Comment> {
    let texts = [
        (
            "1",
            "Sarah Johnson",
            "Amazing work! The e-commerce platform is incredibly user-friendly and has all the features I needed. The design is clean and modern, and the performance is excellent.",
            date(2024, 1, 20),
        ),
        (
            "2",
            "Mike Chen",
            "Great attention to detail and excellent performance. The checkout process is smooth and the admin dashboard is very intuitive. Highly recommended!",
            date(2024, 1, 25),
        ),
        (
            "3",
            "Emily Rodriguez",
            "This project demonstrates excellent full-stack development skills. The code is clean, well-documented, and the user experience is outstanding.",
            date(2024, 2, 1),
        ),
    ];

    texts
        .into_iter()
        .map(|(id, name, text, created_at)| Comment {
            id: id.to_string(),
            project_id: "1".to_string(),
            name: name.to_string(),
            text: text.to_string(),
            created_at,
        })
        .collect()
}

/// Twelve ratings averaging 4.5, matching the canned summary the
/// detail page shows offline.
pub fn ratings() -> Vec<Rating> {
    let values = [5, 4, 5, 4, 5, 4, 5, 4, 5, 4, 5, 4];
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Rating {
            id: format!("r{}", i + 1),
            project_id: "1".to_string(),
            rating: value,
            created_at: date(2024, 1, 16) + chrono::Duration::days(i as i64),
            user_agent: "seed".to_string(),
        })
        .collect()
}

pub fn contacts() -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "I would like to discuss a potential project with you.".to_string(),
            created_at: date(2024, 1, 20),
            read: false,
        },
        ContactMessage {
            id: "2".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "Interested in collaborating on a new web application.".to_string(),
            created_at: date(2024, 1, 22),
            read: true,
        },
    ]
}
