// Everything the portfolio says.
//
// Declaration order matters: the suggestion engine walks names in this
// order and the first of several equally close names wins.

use crate::registry::models::{Declaration, Effect};

pub const GITHUB_URL: &str = "https://github.com/dead10GOD";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sankalp-prajapati-592b50278/";

pub const HEADER_HOST: &str = "prajapati@sankalp:~";
pub const FOOTER: &str = "Type 'help' for commands";

pub const WELCOME: &[&str] = &["Hey there! Howdy ?", "Type 'help' to see available commands", ""];

const HELP: &[&str] = &[
    "Available commands:",
    "",
    "  [white]help, h[/]          [white]-[/] [red]Show this help message[/]",
    "  [white]about, whoami[/]    [white]-[/] [green]Learn about me[/]",
    "  [white]projects, ls[/]     [white]-[/] [blue]View my projects[/]",
    "  [white]skills[/]           [white]-[/] [yellow]See my technical skills[/]",
    "  [white]contact[/]          [white]-[/] [red]Get in touch[/]",
    "  [white]experience[/]       [white]-[/] [green]View work experience[/]",
    "  [white]education[/]        [white]-[/] [blue]Academic background[/]",
    "  [white]clear, cls[/]       [white]-[/] [yellow]Clear terminal[/]",
    "  [white]github[/]           [white]-[/] [red]Open GitHub profile[/]",
    "  [white]linkedin[/]         [white]-[/] [green]Open LinkedIn profile[/]",
    "  [white]resume[/]           [white]-[/] [blue]Download resume[/]",
    "  [white]joke[/]             [white]-[/] [cyan]Get a programming joke[/]",
    "  [white]exit[/]             [white]-[/] [red]Exit terminal[/]",
    "",
];

const ABOUT: &[&str] = &[
    "[cyan]sankalp@portfolio:~$ whoami[/]",
    "",
    "[yellow]export[/] [blue]NAME[/]=[green]\"Sankalp Prajapati\"[/]",
    "[yellow]export[/] [blue]ROLE[/]=[green]\"Computer Science Student & Developer\"[/]",
    "[yellow]export[/] [blue]LOCATION[/]=[green]\"Varanasi, UP → KIIT University, Bhubaneswar\"[/]",
    "[yellow]export[/] [blue]CGPA[/]=[green]\"9.09/10.0\"[/]",
    "",
    "[white]A Computer Science student at[/] [blue]KIIT University[/] [white]who:[/]",
    "[green]•[/] [white]Writes code that compiles on the third try[/] [gray](optimistic estimate)[/]",
    "[green]•[/] [white]Debugs life one[/] [yellow]console.log()[/] [white]at a time[/]",
    "[green]•[/] [white]Fluent in[/] [cyan]Stack Overflow[/] [white]and caffeine[/]",
    "[green]•[/] [white]Currently pursuing B.Tech with[/] [yellow]stellar academic performance[/]",
    "",
    "[purple]Hobbies and interests outside coding:[/]",
    "[cyan]~/interests/sports[/] [white]→[/] [green]Volleyball, Badminton[/]",
    "[cyan]~/interests/music[/] [white]→[/] [green]Guitar[/]",
    "[cyan]~/interests/adventure[/] [white]→[/] [green]Trekking[/]",
    "[cyan]~/interests/games[/] [white]→[/] [green]Chess on chess.com (handle: Sunkey107)[/]",
    "",
    "[yellow]console.log([/][green]\"Fun fact: I debug faster than I create bugs... usually.\"[/][yellow]);[/]",
    "",
];

const PROJECTS: &[&str] = &[
    "[blue]📁 ~/projects/[/]",
    "",
    "[yellow]📄 Anti-Spoofing Attack[/] [gray](May 2024 - Jul 2024)[/]",
    "   [green]├──[/] [white]Digilocker and Entity Locker security enhancement[/]",
    "   [green]├──[/] [white]Built CNN models with[/] [yellow]95% accuracy[/] [white]in detecting image spoofing[/]",
    "   [green]├──[/] [white]Processed[/] [cyan]10,000+[/] [white]images using OpenCV and deep learning[/]",
    "   [green]└──[/] [purple]Technologies:[/] [blue]Python, OpenCV, TensorFlow, ResNet[/]",
    "",
    "[yellow]📱 Nagrik Aur Samvidhan Mobile App[/] [gray](Nov 2024 - Dec 2024)[/]",
    "   [green]├──[/] [red]SIH'24 Runner-up project[/] [yellow](Top 5 in country!)[/]",
    "   [green]├──[/] [white]AI chatbot for Indian Constitution simplification[/]",
    "   [green]├──[/] [white]Multilingual text-to-speech and notifications[/]",
    "   [green]└──[/] [purple]Technologies:[/] [blue]React Native, Flask, MySQL[/]",
    "",
    "[cyan]💡 More projects in development...[/]",
    "   [green]└──[/] [gray]Because perfect code is a myth, but we chase it anyway[/]",
    "",
];

const SKILLS: &[&str] = &[
    "[yellow]🛠️  Technical Arsenal:[/]",
    "",
    "[blue]Languages:[/]",
    "  [green]├──[/] [white]C/C++[/] [gray](Memory management builds character)[/]",
    "  [green]├──[/] [white]Java[/] [gray](Write once, debug everywhere)[/]",
    "  [green]└──[/] [white]Python[/] [gray](Life's too short for semicolons)[/]",
    "",
    "[purple]Frameworks & Tools:[/]",
    "  [green]├──[/] [white]Git[/] [gray](Time travel for code mistakes)[/]",
    "  [green]├──[/] [white]OpenCV[/] [gray](Teaching machines to see better than me)[/]",
    "  [green]├──[/] [white]NumPy & Pandas[/] [gray](Data wrangling ninjas)[/]",
    "  [green]├──[/] [white]Linux[/] [gray](Home is where the terminal is)[/]",
    "  [green]├──[/] [white]TensorFlow[/] [gray](Making silicon smarter than me)[/]",
    "  [green]├──[/] [white]Figma[/] [gray](Making pixels behave)[/]",
    "  [green]├──[/] [white]SQL[/] [gray](Whispering to databases)[/]",
    "  [green]└──[/] [white]React Native[/] [gray](One codebase, infinite possibilities)[/]",
    "",
    "[cyan]Soft Skills:[/]",
    "  [green]├──[/] [white]Problem Solving[/] [gray](Professional puzzle solver)[/]",
    "  [green]├──[/] [white]Team Leadership[/] [gray](Herding developers since 2024)[/]",
    "  [green]└──[/] [white]Teaching[/] [gray](Explaining code to humans and machines)[/]",
    "",
];

const CONTACT: &[&str] = &[
    "[yellow]📞 Get In Touch:[/]",
    "",
    "[white]📧 Email:[/] [blue]meissankalp@gmail.com[/]",
    "[white]📱 Phone:[/] [green]+91-7348476177[/]",
    "[white]🏠 Location:[/] [cyan]Varanasi, UP (Currently in Bhubaneswar)[/]",
    "[white]🐙 GitHub:[/] [red]https://github.com/dead10GOD[/] [gray](Where code goes to live)[/]",
    "[white]💼 LinkedIn:[/] [green]https://www.linkedin.com/in/sankalp-prajapati-592b50278/[/] [gray](Professional facade)[/]",
    "[white]♟️  Chess:[/] [yellow]chess.com/member/Sunkey107[/] [gray](Strategic thinking practice)[/]",
    "",
    "[white]I'm always open to discussing new opportunities,[/]",
    "[white]collaborations, or just having a chat about technology![/]",
    "",
    "[white]Response time:[/] [green]Usually within 24 hours ⚡[/]",
    "[gray](Unless I'm in a debugging rabbit hole)[/]",
    "",
];

const EXPERIENCE: &[&str] = &[
    "[yellow]💼 Work Experience:[/]",
    "",
    "[white]🎓 Teaching Assistant -[/] [blue]KIIT University[/] [gray](Nov 2024 - Apr 2025)[/]",
    "   [green]├──[/] [white]Conducted weekly C programming classes for[/] [cyan]50+ students[/]",
    "   [green]├──[/] [white]Provided one-on-one mentoring in programming & math[/]",
    "   [green]└──[/] [white]Turned compilation errors into learning opportunities[/]",
    "",
    "[white]🏛️  Summer Intern -[/] [blue]Digital India Corporation[/] [gray](May 2024 - Jul 2024)[/]",
    "   [green]├──[/] [white]Developed anti-spoofing measures for[/] [yellow]DigiLocker platforms[/]",
    "   [green]├──[/] [white]Built CNN models with[/] [yellow]95% accuracy[/] [white]in spoofing detection[/]",
    "   [green]└──[/] [white]Made computers better at spotting fakes than humans[/]",
    "",
    "[white]📢 PR/Marketing Lead -[/] [blue]Coding Ninjas Club[/] [gray](Jun 2024 - Oct 2024)[/]",
    "   [green]├──[/] [white]Secured partnerships and sponsorships for club events[/]",
    "   [green]├──[/] [white]Led marketing campaigns resulting in[/] [cyan]50% membership increase[/]",
    "   [green]└──[/] [white]Proved developers can communicate beyond code comments[/]",
    "",
];

const EDUCATION: &[&str] = &[
    "[yellow]🎓 Academic Background:[/]",
    "",
    "[white]🏫[/] [blue]KIIT University, Bhubaneswar, Odisha[/]",
    "   [green]├──[/] [white]B.Tech in Computer Science and Engineering[/]",
    "   [green]├──[/] [white]Duration: Sep 2022 - Present[/]",
    "   [green]├──[/] [white]CGPA:[/] [green]9.09/10.0[/] [gray](Perfectionism is a feature, not a bug)[/]",
    "   [green]└──[/] [white]Status: Learning, coding, repeat[/]",
    "",
    "[white]📚 What I'm learning:[/]",
    "   [green]├──[/] [white]Data Structures & Algorithms[/] [gray](The art of organized chaos)[/]",
    "   [green]├──[/] [white]Machine Learning[/] [gray](Teaching silicon to think)[/]",
    "   [green]├──[/] [white]Software Engineering[/] [gray](Building digital architecture)[/]",
    "   [green]└──[/] [white]Database Management[/] [gray](Where data finds its home)[/]",
    "",
];

const GITHUB: &[&str] = &[
    "🐙 Opening GitHub profile...",
    "https://github.com/dead10GOD",
    "",
    "echo \"Warning: Repository may contain experimental features\" 🧪",
    "",
];

const LINKEDIN: &[&str] = &[
    "💼 Opening LinkedIn profile...",
    "https://www.linkedin.com/in/sankalp-prajapati-592b50278/",
    "",
    "echo \"Professional mode: activated\" 💼",
    "",
];

// The resume link is not published, so this one only talks about it.
const RESUME: &[&str] = &[
    "📄 Opening resume...",
    ". . . . . . .",
    "",
    "[red]echo \"Warning: May cause spontaneous hiring 📄\"[/]",
    "",
];

const JOKE: &[&str] = &["Really ? You here for the jokes ?", ""];

const EXIT: &[&str] = &["Goodbye ! May the devil bless you :)", ""];

const fn command(
    name: &'static str,
    summary: &'static str,
    body: &'static [&'static str],
) -> Declaration {
    Declaration::Command {
        name,
        summary,
        body,
        effect: Effect::None,
    }
}

const fn alias(name: &'static str, target: &'static str) -> Declaration {
    Declaration::Alias { name, target }
}

/// The complete vocabulary
pub const DECLARATIONS: &[Declaration] = &[
    command("help", "Show this help message", HELP),
    alias("h", "help"),
    command("about", "Learn about me", ABOUT),
    alias("whoami", "about"),
    command("projects", "View my projects", PROJECTS),
    alias("ls", "projects"),
    command("skills", "See my technical skills", SKILLS),
    command("contact", "Get in touch", CONTACT),
    command("experience", "View work experience", EXPERIENCE),
    command("education", "Academic background", EDUCATION),
    Declaration::Command {
        name: "clear",
        summary: "Clear terminal",
        body: &[],
        effect: Effect::ClearTranscript,
    },
    alias("cls", "clear"),
    Declaration::Command {
        name: "github",
        summary: "Open GitHub profile",
        body: GITHUB,
        effect: Effect::OpenUrl(GITHUB_URL),
    },
    Declaration::Command {
        name: "linkedin",
        summary: "Open LinkedIn profile",
        body: LINKEDIN,
        effect: Effect::OpenUrl(LINKEDIN_URL),
    },
    command("resume", "Download resume", RESUME),
    command("joke", "Get a programming joke", JOKE),
    command("exit", "Exit terminal", EXIT),
];
