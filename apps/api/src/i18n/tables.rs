// Static translation tables. English is the complete reference table;
// other languages may omit keys and inherit the English text.

pub const EN: &[(&str, &str)] = &[
    ("header.title", "CareerPath AI"),
    ("header.subtitle", "Your guide to the future"),
    ("nav.home", "Home"),
    ("nav.assessment", "Assessment"),
    ("nav.chat", "AI Advisor"),
    ("nav.resume", "Resume"),
    ("nav.login", "Login"),
    ("nav.logout", "Logout"),
    ("hero.title", "Discover your dream career"),
    (
        "hero.subtitle",
        "Make the right decision with AI-powered guidance",
    ),
    ("hero.cta", "Get started"),
    ("assessment.title", "Career Assessment"),
    (
        "assessment.description",
        "Answer a few questions to find careers that fit you",
    ),
    ("assessment.submit", "Submit"),
    ("chat.title", "AI Career Advisor"),
    ("chat.placeholder", "Type your question here..."),
    ("chat.send", "Send"),
    ("chat.thinking", "Thinking..."),
    ("resume.upload", "Upload your resume (PDF)"),
    ("resume.extracting", "Reading your resume..."),
    (
        "resume.error",
        "We couldn't read that file. Please upload a valid PDF.",
    ),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.signIn", "Sign in"),
    ("auth.signUp", "Sign up"),
    ("auth.guest", "Continue as guest"),
    ("auth.google", "Continue with Google"),
    ("auth.github", "Continue with GitHub"),
    ("auth.welcome", "Welcome back"),
    ("footer.rights", "All rights reserved."),
];

pub const TE: &[(&str, &str)] = &[
    ("header.title", "కెరీర్‌పాత్ AI"),
    ("header.subtitle", "మీ భవిష్యత్తుకు మార్గదర్శి"),
    ("nav.home", "హోమ్"),
    ("nav.assessment", "అంచనా"),
    ("nav.chat", "AI సలహాదారు"),
    ("nav.resume", "రెజ్యూమ్"),
    ("nav.login", "లాగిన్"),
    ("nav.logout", "లాగ్ అవుట్"),
    ("hero.title", "మీ కలల కెరీర్‌ను కనుగొనండి"),
    (
        "hero.subtitle",
        "AI ఆధారిత మార్గదర్శకత్వంతో సరైన నిర్ణయం తీసుకోండి",
    ),
    ("hero.cta", "ప్రారంభించండి"),
    ("assessment.title", "కెరీర్ అంచనా"),
    ("assessment.submit", "సమర్పించండి"),
    ("chat.title", "AI కెరీర్ సలహాదారు"),
    ("chat.placeholder", "మీ ప్రశ్నను ఇక్కడ టైప్ చేయండి..."),
    ("chat.send", "పంపండి"),
    ("auth.email", "ఇమెయిల్"),
    ("auth.password", "పాస్‌వర్డ్"),
    ("auth.signIn", "సైన్ ఇన్"),
    ("auth.signUp", "సైన్ అప్"),
    ("auth.guest", "అతిథిగా కొనసాగండి"),
];

pub const HI: &[(&str, &str)] = &[
    ("header.title", "करियरपाथ AI"),
    ("header.subtitle", "आपके भविष्य का मार्गदर्शक"),
    ("nav.home", "होम"),
    ("nav.assessment", "मूल्यांकन"),
    ("nav.chat", "AI सलाहकार"),
    ("nav.login", "लॉगिन"),
    ("nav.logout", "लॉग आउट"),
    ("hero.title", "अपने सपनों का करियर खोजें"),
    ("hero.cta", "शुरू करें"),
    ("chat.placeholder", "अपना प्रश्न यहाँ लिखें..."),
    ("chat.send", "भेजें"),
    ("auth.email", "ईमेल"),
    ("auth.password", "पासवर्ड"),
    ("auth.signIn", "साइन इन"),
    ("auth.guest", "अतिथि के रूप में जारी रखें"),
];
