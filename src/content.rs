// src/content.rs
//
// Fixed marketing copy for the brokerage pages.

pub const BRAND: &str = "EliteHomes";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "1,200+", label: "Properties Sold" },
    Stat { value: "850+", label: "Happy Clients" },
    Stat { value: "15+", label: "Years Experience" },
    Stat { value: "4.9", label: "Client Rating" },
];

/// Short titled blurb: selling points, values, specialties.
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

pub const WHY_US: &[Blurb] = &[
    Blurb {
        title: "Expert Market Knowledge",
        body: "Our team has deep local market expertise to help you make informed decisions and find the best opportunities.",
    },
    Blurb {
        title: "Personalized Service",
        body: "We take time to understand your unique needs and preferences to provide tailored property recommendations.",
    },
    Blurb {
        title: "Proven Track Record",
        body: "With over 15 years of experience and hundreds of successful transactions, we deliver results you can trust.",
    },
];

pub const VALUES: &[Blurb] = &[
    Blurb {
        title: "Client-Centered Service",
        body: "Every decision we make is focused on delivering exceptional value and service to our clients.",
    },
    Blurb {
        title: "Trust & Integrity",
        body: "We operate with complete transparency and honesty in every transaction and interaction.",
    },
    Blurb {
        title: "Results-Driven",
        body: "We're committed to achieving the best possible outcomes for our clients' real estate goals.",
    },
    Blurb {
        title: "Excellence",
        body: "We strive for excellence in every aspect of our service, from initial consultation to closing.",
    },
];

pub const STORY: &[&str] = &[
    "Founded in 2009, EliteHomes began as a small family-owned real estate agency with a simple mission: \
     to provide exceptional service and help people find not just houses, but homes where they can build \
     their dreams and create lasting memories.",
    "Over the years, we've grown from a local startup to one of the most trusted names in real estate, \
     serving clients across multiple markets. Our success isn't measured just in transactions completed, \
     but in the relationships we've built and the lives we've helped transform.",
    "Today, EliteHomes represents the perfect blend of traditional values and modern innovation. We \
     leverage cutting-edge technology and market insights while maintaining the personal touch and \
     integrity that have been our foundation from day one.",
];

pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub const LEADERSHIP: &[Leader] = &[
    Leader {
        name: "Sarah Johnson",
        role: "CEO & Founder",
        image: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "With over 20 years in real estate, Sarah founded EliteHomes with a vision to revolutionize property buying and selling.",
    },
    Leader {
        name: "Michael Chen",
        role: "Senior Sales Director",
        image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "Michael brings 15 years of sales expertise and has helped over 500 families find their dream homes.",
    },
    Leader {
        name: "Emily Rodriguez",
        role: "Marketing Director",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "Emily leads our marketing efforts and ensures every property gets the attention it deserves in the market.",
    },
    Leader {
        name: "David Thompson",
        role: "Property Manager",
        image: "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=400",
        bio: "David oversees our luxury property portfolio and maintains relationships with high-end clients.",
    },
];

pub struct Specialist {
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub specialties: &'static [&'static str],
}

pub const SPECIALISTS: &[Specialist] = &[
    Specialist {
        name: "Sarah Johnson",
        role: "Senior Sales Agent",
        phone: "+1 (555) 123-4567",
        email: "sarah@elitehomes.com",
        specialties: &["Luxury Homes", "First-Time Buyers"],
    },
    Specialist {
        name: "Michael Chen",
        role: "Commercial Specialist",
        phone: "+1 (555) 234-5678",
        email: "michael@elitehomes.com",
        specialties: &["Commercial Properties", "Investments"],
    },
    Specialist {
        name: "Emily Rodriguez",
        role: "Property Manager",
        phone: "+1 (555) 345-6789",
        email: "emily@elitehomes.com",
        specialties: &["Rentals", "Property Management"],
    },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub action: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Visit Our Office",
        details: &["123 Main Street, Suite 100", "Downtown Business District", "City, State 12345"],
        action: "Get Directions",
    },
    ContactChannel {
        title: "Call Us",
        details: &["+1 (234) 567-8900", "+1 (234) 567-8901", "Toll-Free: 1-800-ELITE-HOME"],
        action: "Call Now",
    },
    ContactChannel {
        title: "Email Us",
        details: &["info@elitehomes.com", "sales@elitehomes.com", "support@elitehomes.com"],
        action: "Send Email",
    },
    ContactChannel {
        title: "Office Hours",
        details: &[
            "Monday - Friday: 8:00 AM - 7:00 PM",
            "Saturday: 9:00 AM - 5:00 PM",
            "Sunday: 12:00 PM - 4:00 PM",
        ],
        action: "Schedule Visit",
    },
];

pub const OFFICE_ADDRESS: &[&str] = &[
    "123 Main Street, Suite 100",
    "Downtown Business District",
    "City, State 12345",
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Property Sales",
        description: "Expert guidance through the entire home selling process, from pricing to closing.",
        features: &["Market Analysis", "Professional Photography", "Marketing Strategy", "Negotiation Support"],
    },
    Service {
        title: "Property Rentals",
        description: "Find the perfect rental property or manage your investment properties efficiently.",
        features: &["Tenant Screening", "Lease Management", "Maintenance Coordination", "Rent Collection"],
    },
    Service {
        title: "Investment Consulting",
        description: "Strategic advice for real estate investments to maximize your returns.",
        features: &["ROI Analysis", "Market Trends", "Portfolio Planning", "Risk Assessment"],
    },
    Service {
        title: "Property Management",
        description: "Comprehensive management services for residential and commercial properties.",
        features: &["24/7 Support", "Maintenance Services", "Financial Reporting", "Tenant Relations"],
    },
    Service {
        title: "Property Valuation",
        description: "Accurate property valuations using advanced market analysis and local expertise.",
        features: &["CMA Reports", "Market Research", "Appraisal Coordination", "Price Recommendations"],
    },
    Service {
        title: "Legal & Documentation",
        description: "Complete handling of all legal documents and regulatory requirements.",
        features: &["Contract Review", "Closing Coordination", "Title Services", "Regulatory Compliance"],
    },
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[Step] = &[
    Step {
        number: "01",
        title: "Initial Consultation",
        description: "We meet to understand your needs, goals, and timeline for your real estate transaction.",
    },
    Step {
        number: "02",
        title: "Market Analysis",
        description: "Comprehensive analysis of current market conditions and comparable properties in your area.",
    },
    Step {
        number: "03",
        title: "Strategy Development",
        description: "Create a customized plan tailored to your specific situation and objectives.",
    },
    Step {
        number: "04",
        title: "Implementation",
        description: "Execute the plan with professional marketing, showings, negotiations, and closing coordination.",
    },
    Step {
        number: "05",
        title: "Follow-up",
        description: "Continued support after closing to ensure your satisfaction and address any questions.",
    },
];

pub const BENEFITS: &[&str] = &[
    "Expert local market knowledge",
    "Professional marketing and photography",
    "Extensive network of qualified buyers and sellers",
    "Skilled negotiation to maximize your outcomes",
    "Full-service transaction management",
    "Ongoing support and consultation",
];

pub const SPECIALIZED: &[Blurb] = &[
    Blurb {
        title: "Luxury Properties",
        body: "Specialized service for high-end properties with discretion, extensive marketing reach, and luxury market expertise.",
    },
    Blurb {
        title: "First-Time Buyers",
        body: "Comprehensive guidance and support for first-time homebuyers, including education and financing assistance.",
    },
    Blurb {
        title: "Commercial Real Estate",
        body: "Expert services for commercial property transactions, including office buildings, retail spaces, and investments.",
    },
];
