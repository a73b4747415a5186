// Built-in portfolio content, used when no content file is configured

use super::{Contact, Portfolio};
use crate::typewriter::Snippet;

const PYTHON: &str = r#"def create_amazing():
    skills = ["AI/ML", "Web Dev", "IoT"]
    return "Rahul builds " + skills[0]

def innovate():
    return "Building amazing things" 🚀

result = innovate()"#;

const JAVA: &str = r#"public class Developer {
    private String name = "Rahul";
    private String[] skills = {"AI", "ML", "Web"};

    public String create() {
        return "Building amazing things";
    }

    public void innovate() {
        System.out.println("Creating future");
    }
}"#;

const CPP: &str = r#"class Developer {
private:
    string name = "Rahul";
    vector<string> skills = {"IoT", "AI"};
public:
    string create() {
        return "Amazing Things";
    }
    void innovate() {
        cout << "Building future" << endl;
    }
};"#;

const CSHARP: &str = r#"public class Developer {
    private string name = "Rahul";
    private string[] skills = {"AI", "ML", "Web"};

    public string Create() {
        return "Building amazing things";
    }

    public void Innovate() {
        Console.WriteLine("Creating future");
    }
}"#;

const JAVASCRIPT: &str = r#"class Developer {
    constructor() {
        this.name = "Rahul";
        this.skills = ["React", "Node", "AI"];
    }

    create() {
        return "Building amazing things" 🚀;
    }

    innovate() {
        console.log("Creating future");
    }
}"#;

pub(super) fn portfolio() -> Portfolio {
    Portfolio {
        name: "Rahul Agarwal".to_string(),
        tagline: "Python Developer • Full Stack Developer • AI/ML Enthusiast • IoT Developer"
            .to_string(),
        bio: "Building intelligent solutions that bridge technology and innovation. \
              Specialized in AI/ML, IoT systems, and scalable web applications."
            .to_string(),
        roles: [
            "AI/ML Engineer",
            "Full Stack Developer",
            "IoT Innovator",
            "Award-Winning Developer",
        ]
        .iter()
        .map(|r| r.to_string())
        .collect(),
        snippets: vec![
            Snippet::new("Python", PYTHON),
            Snippet::new("Java", JAVA),
            Snippet::new("C++", CPP),
            Snippet::new("C#", CSHARP),
            Snippet::new("JavaScript", JAVASCRIPT),
        ],
        contacts: vec![
            Contact::new("Call Me", "tel:+919401203345"),
            Contact::new("Email", "mailto:rahulagarwal1@gmail.com"),
            Contact::new("LinkedIn", "https://linkedin.com/in/rahul-agarwal-1b888823a"),
            Contact::new("GitHub", "https://github.com/rahulagarwal18"),
        ],
    }
}
