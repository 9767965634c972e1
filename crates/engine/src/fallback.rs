//! Scripted fallback responses
//!
//! Ordered table of (pattern, reply) pairs evaluated against the lowercased
//! message when the chat delegate is unavailable. First match wins; the
//! ordering is semantically significant and covered by tests. If nothing
//! matches, the generic menu response is returned.

use rand::seq::SliceRandom;
use regex::Regex;

const GREETINGS: [&str; 3] = [
    "Hey there! 👋 I'm Vicky's AI assistant. I help businesses find the perfect AI solution. What brings you here today?",
    "Hello! 😊 Great to meet you! I'm here to help you discover how AI can transform your business. What's on your mind?",
    "Hi! Welcome to Vicky AI Systems! 🚀 I specialize in matching businesses with the right AI solutions. How can I help you today?",
];

const GRATITUDE: &str = "You're very welcome! 😊 I'm here anytime you need help. Feel free to ask me anything else about AI solutions, pricing, or Vicky's work!";

const IDENTITY: &str = r#"I'm Vicky's AI assistant! 🤖 Think of me as your personal AI consultant. I help people like you understand:

✨ What AI can do for your business
💰 How much it costs (transparent pricing!)
🎯 Which solution fits your needs best
⏱️ How quickly we can build it

Vicky built me to be helpful and honest - no sales fluff, just real solutions. What would you like to know?"#;

pub(crate) const PRICING: &str = r#"Great question! Let me break down the pricing honestly 💰

The investment depends on what you need:

🤖 **AI Agents & Automation**
   Simple: ₹15K-25K | Advanced: ₹70K-1.2L

🧠 **Machine Learning / Deep Learning**
   Model Training: ₹30K-70K | Vision/NLP: ₹50K-1.2L

💻 **Full-Stack AI Apps**
   Dashboard: ₹40K-70K | Complete SaaS: ₹1.5L-3L

⚙️ **Automation Workflows**
   Single: ₹10K-20K | Enterprise Suite: ₹60K-1L

Here's the thing - these are ranges because every project is unique. Tell me what you're trying to build, and I'll give you a realistic estimate. No hidden costs, no surprises! 😊

What kind of project are you considering?"#;

const SERVICES: &str = r#"Ah, you want the full picture! 🎯 Here's what we excel at:

🤖 **AI Agents & Automation**
Think: Autonomous research agents, workflow automation, CRM bots, data processing pipelines

🧠 **Machine Learning & Deep Learning**
Medical imaging (97.94% accuracy!), computer vision, NLP, custom model training, transfer learning

🎤 **Speech & Audio AI**
Whisper integration, multilingual transcription, voice assistants, low-WER systems

👁️ **Computer Vision**
Object detection, image classification, OCR, video analysis, real-time processing

💻 **Full-Stack Development**
React/Next.js, FastAPI/Spring Boot, real-time apps (WebSockets), PWAs, responsive design

📊 **Data Engineering & Analytics**
ETL pipelines, dashboards, data visualization, PostgreSQL/MongoDB optimization

🚀 **DevOps & Deployment**
Docker, CI/CD, cloud deployment (AWS/Azure/Render), monitoring, scaling

What catches your eye? Or tell me your problem and I'll suggest the best approach! 💡"#;

const MACHINE_LEARNING: &str = r#"Now we're talking! 🧠 ML/DL is my favorite topic!

Here's what Vicky's built:

🏥 **Medical Imaging AI**
- Brain tumor detection: 97.94% accuracy using EfficientNetB3
- X-ray classification, MRI analysis, pathology detection

🐄 **Agriculture & Livestock**
- Cattle breed identification for Indian farms
- Crop disease detection
- Yield prediction models

🎯 **Custom ML Solutions**
- Image classification (transfer learning, fine-tuning)
- NLP models (sentiment, named entity recognition, text classification)
- Time series forecasting
- Recommendation systems
- Anomaly detection

**Tech Stack:**
TensorFlow, PyTorch, Keras, scikit-learn, Hugging Face Transformers, YOLO, EfficientNet

We handle everything: data collection → preprocessing → training → deployment → monitoring

What's your ML challenge? Be specific and I'll tell you exactly how we'd solve it! 💪"#;

const FULL_STACK: &str = r#"Python full-stack? That's Vicky's bread and butter! 🐍

**Backend Mastery:**
- FastAPI (async, high-performance REST APIs)
- Django/Flask for complex applications
- Spring Boot (Java) for enterprise systems
- WebSocket servers for real-time features
- Background tasks with Celery
- API design & documentation (OpenAPI/Swagger)

**Frontend Skills:**
- React (with hooks, context, Redux)
- Next.js for SEO-friendly apps
- Vanilla JS for lightweight projects
- Responsive design (mobile-first)
- Real-time UI updates (WebSockets, SSE)

**Database Expertise:**
- PostgreSQL (complex queries, optimization)
- MongoDB (document stores, aggregations)
- Redis (caching, queues)
- Database design & migrations

**Real Projects Built:**
✅ Real-time polling system (handling race conditions)
✅ QR-based queue management with SSE
✅ Learning analytics dashboards
✅ Medical imaging platforms with prediction APIs

What are you looking to build? Web app? API? Dashboard? 🚀"#;

const HEALTHCARE: &str = r#"Healthcare AI is where technology meets lives! 🏥

Vicky's proven track record in medical AI:

🧠 **Brain Tumor Detection**
- 97.94% accuracy on MRI classification
- 4-class tumor type identification
- Production-ready API with FastAPI
- Real-time inference

💊 **What We Can Build for You:**
- Medical image analysis (X-rays, CT, MRI)
- Patient management systems
- Symptom checkers & triage assistants
- Electronic health records (EHR) integration
- Appointment scheduling automation
- Prescription management
- Telemedicine platforms

📊 **Compliance & Quality:**
We understand healthcare data sensitivity. HIPAA-aware development, secure data handling, audit trails.

**Investment:** ₹50K - ₹2.5L depending on complexity

What healthcare challenge are you tackling? Be specific! 🩺"#;

const AGRICULTURE: &str = r#"Agriculture + AI = Amazing possibilities! 🌾

Real systems built for Indian farming:

🐄 **Livestock Management**
- Cattle & buffalo breed identification
- Health monitoring through image analysis
- Milk yield prediction
- Disease detection

🌱 **Crop Intelligence**
- Disease detection from leaf images
- Pest identification
- Yield forecasting
- Soil analysis recommendations

📱 **Farm Management Tools**
- Mobile apps for farmers (Hindi/regional languages)
- Weather-based advisory systems
- Market price tracking
- Irrigation optimization

**Budget:** ₹40K - ₹1.5L

These systems work in low-connectivity areas, are mobile-first, and designed for non-tech-savvy users.

What agricultural problem needs solving? 🚜"#;

const ECOMMERCE: &str = r#"Let's boost your business with AI! 📈

**E-commerce AI Solutions:**

🤖 **Intelligent Automation**
- Product data scraping & analysis
- Competitor price monitoring
- Inventory optimization
- Order processing automation
- Customer service chatbots

📊 **Analytics & Insights**
- Sales forecasting
- Customer segmentation
- Recommendation engines
- Churn prediction
- A/B testing frameworks

🎯 **Customer Experience**
- Personalized product recommendations
- Visual search (find products by image)
- Virtual try-on (AR for fashion/furniture)
- Dynamic pricing optimization

**Real Impact:**
One of our automation systems saved a client 40 hours/week on manual data entry!

**Budget:** ₹30K - ₹2.5L based on features

What's your biggest business bottleneck right now? 🎯"#;

const EDUCATION: &str = r#"EdTech + AI = Future of learning! 📚 (And I'm biased - Vicky's at IIT Madras!)

**AI-Powered Education Solutions:**

🎓 **Learning Management**
- Student progress tracking (like Vicky's IITian Milestone Tracker)
- Personalized learning paths
- Adaptive assessments
- Performance analytics

🤖 **AI Tutoring & Assistance**
- Subject-specific AI tutors
- Doubt resolution chatbots
- Essay scoring & feedback
- Code evaluation for programming courses

📊 **Admin & Analytics**
- Attendance tracking (face recognition)
- Plagiarism detection
- Student at-risk prediction
- Resource optimization

💬 **Engagement Tools**
- Live polling systems (like QuickPoll)
- Interactive quizzes
- Peer collaboration platforms

**Budget:** ₹40K - ₹1.8L

What educational challenge are you solving? 🎯"#;

const CONTACT: &str = r#"Let's make it happen! 🚀 Here's how to reach Vicky directly:

📧 **Email:** npdimagine@gmail.com
📱 **WhatsApp:** +91 83838 48219
💻 **GitHub:** github.com/algsoch
🔗 **LinkedIn:** linkedin.com/in/algsoch
📍 **Location:** New Delhi, India (Remote + On-site available)

**What happens next?**
1. Message Vicky with your project idea
2. Within 24-48 hours, you get a detailed response with:
   ✅ Technical approach & architecture
   ✅ Timeline with milestones
   ✅ Exact cost breakdown
   ✅ Similar project examples

3. If you like it, work begins!

**Or use the contact form** at the bottom of this page - it goes straight to Vicky's inbox.

Ready to start? Drop him a message! 💪"#;

const TIMELINE: &str = r#"Let's talk timelines! ⏱️ I believe in realistic estimates, not fake promises.

**Typical Timelines:**

⚡ **Quick Wins (1-2 weeks)**
- Simple automation scripts
- Basic dashboards
- API integrations
- Proof of concepts

🔧 **Medium Projects (3-6 weeks)**
- ML model training & deployment
- Full-stack web applications
- Complex automation workflows
- Mobile app (MVP)

🚀 **Large Systems (2-3 months)**
- Enterprise platforms
- Advanced AI systems
- Multi-platform solutions
- Systems with complex integrations

**The Vicky Advantage:**
✅ Clear milestones every week
✅ Regular demos (you see progress)
✅ Agile approach (adapt as we go)
✅ 24-48 hour response time

Got a tight deadline? Tell me the date and what you need - we'll be honest if it's doable! 💯"#;

const TECH_STACK: &str = r#"You want to see the arsenal? Here's what Vicky masters: ⚡

**Languages:**
Python 🐍 | Java ☕ | JavaScript/TypeScript | SQL | HTML/CSS

**Backend Frameworks:**
FastAPI (⭐ favorite for APIs) | Django | Flask | Spring Boot | Node.js

**Frontend:**
React | Next.js | Vanilla JS | TailwindCSS | WebSockets for real-time

**ML/DL Frameworks:**
TensorFlow | PyTorch | Keras | scikit-learn | Hugging Face | YOLO | EfficientNet

**Databases:**
PostgreSQL | MongoDB | MySQL | Redis | Vector DBs (for AI apps)

**DevOps & Cloud:**
Docker 🐳 | GitHub Actions | AWS | Azure | Render | DigitalOcean | Nginx

**AI/ML Tools:**
OpenAI APIs | LangChain | Whisper | wav2vec2 | OpenCV | NLTK | spaCy

**Other Cool Stuff:**
Celery | RabbitMQ | WebSocket | Server-Sent Events | Cloudflared | Ngrok

Everything is **production-ready**, not just tutorial code. We deploy, monitor, and maintain! 🚀

What technology are you curious about?"#;

const WHY_US: &str = r#"Great question! Let me be honest about what makes Vicky different: 💫

**1. Real Production Experience**
Not just tutorials - 40+ projects that actually run in production serving real users

**2. End-to-End Execution**
From idea → design → code → deployment → maintenance. One person, full stack, no handoffs

**3. Academic + Practical**
IIT Madras student + professional experience (Outlier, Soul AI, Mercor) = best of both worlds

**4. Transparent Communication**
- Responds in 24-48 hours
- Clear pricing (no hidden costs)
- Weekly progress updates
- Honest about what's possible

**5. Modern Tech Stack**
Uses latest tools & best practices. Your project won't be outdated in 6 months!

**6. Problem Solver Mindset**
Doesn't just code what you ask - suggests better approaches, saves you money, prevents issues

**7. Portfolio Speaks**
97.94% ML accuracy, real-time systems handling concurrency, complex full-stack apps - results matter!

Want to see specific examples of past work? 🎯"#;

const NLP: &str = r#"NLP & Language AI - my jam! 🗣️

**What Vicky Can Build:**

💬 **Chatbots & Assistants**
- Customer service bots (like this one, but better!)
- Domain-specific assistants (legal, medical, technical)
- Multi-turn conversations with context
- Integration with WhatsApp, Slack, Discord

📝 **Text Analysis**
- Sentiment analysis (reviews, social media)
- Named Entity Recognition
- Text classification & categorization
- Content moderation
- Summarization (documents, articles)

🌐 **Multilingual Systems**
- Translation pipelines
- Cross-lingual search
- Regional language support (Hindi, Tamil, etc.)

🔍 **Search & Retrieval**
- Semantic search (understand intent, not just keywords)
- Document Q&A systems
- Knowledge base assistants

**Tech:** Hugging Face Transformers, OpenAI APIs, LangChain, BERT, GPT fine-tuning

**Budget:** ₹35K - ₹1.5L based on complexity

What NLP problem are you trying to solve? 🎯"#;

const COMPUTER_VISION: &str = r#"Computer Vision - teaching machines to see! 👁️

**Proven Capabilities:**

🏥 **Medical Imaging**
- Brain tumor detection (97.94% accuracy!)
- X-ray analysis
- Disease diagnosis from images

🐄 **Agriculture & Livestock**
- Cattle breed identification
- Crop disease detection
- Pest identification

🏭 **Industry Applications**
- Quality control & defect detection
- Inventory counting
- Safety monitoring (PPE detection)

🚗 **Smart Systems**
- License plate recognition
- Face detection & recognition
- People counting & tracking

📄 **Document Processing**
- OCR (extract text from images)
- Document classification
- Signature verification

**Tech Stack:**
TensorFlow, PyTorch, YOLO, EfficientNet, ResNet, OpenCV, PIL

**Real-time Processing:** Can build systems that analyze 30+ frames/second!

**Budget:** ₹50K - ₹1.5L depending on accuracy requirements

What do you need machines to see? 🎯"#;

const DEPLOYMENT: &str = r#"Deployment & DevOps - where code meets reality! 🚀

**We Don't Just Code - We Ship!**

🐳 **Containerization**
- Docker for consistent environments
- Docker Compose for local development
- Multi-stage builds (optimized images)

⚙️ **CI/CD Pipelines**
- GitHub Actions (automated testing & deployment)
- Automated testing before deployment
- Zero-downtime deployments

☁️ **Cloud Platforms**
- **Render** (⭐ favorite for Python apps)
- **AWS** (EC2, Lambda, S3, RDS)
- **Azure** (full stack)
- **DigitalOcean** (cost-effective VPS)

📊 **Monitoring & Maintenance**
- Health checks & uptime monitoring
- Error tracking & alerts
- Performance optimization
- Auto-scaling strategies

🔒 **Security**
- HTTPS/SSL setup
- Environment variable management
- Database backups
- CORS & security headers

**Real Examples:**
✅ Deployed ML models serving 1000s of predictions/day
✅ WebSocket servers handling concurrent connections
✅ Background workers for heavy tasks

**Budget:** ₹10K - ₹50K for complete deployment setup

Need help getting your app to production? 💪"#;

const INTEGRATIONS: &str = r#"Discord & integrations - smart! 🔔

**Webhook & Integration Solutions:**

💬 **Discord Bots & Webhooks**
- Custom Discord bots
- Automated notifications
- Form submissions → Discord
- Alert systems
- Command-based interactions

🔗 **API Integrations**
- Connect any service to any service
- Webhook handling & routing
- Event-driven architectures
- Real-time notifications

**Common Use Cases:**
✅ Contact form → Discord notification
✅ Payment received → Team alert
✅ System error → Instant notification
✅ User signup → Welcome automation
✅ Data updates → Team dashboard

This website actually uses Discord webhooks for the contact form! When you submit, it goes straight to a Discord channel. 

Want to set up custom integrations? 🎯"#;

pub(crate) const DEFAULT_MENU: &str = r#"I'm here to help you find the perfect AI solution! 😊

Here's what I can tell you about:
• 💰 **Pricing** - transparent costs for your project
• 🎯 **Services** - what AI can do for you
• 🧠 **ML/DL** - machine learning & deep learning
• 💻 **Full-Stack** - complete web applications
• 📱 **Contact** - how to reach Vicky directly

Or just **tell me about your problem** in plain English:
- "I need to automate my business workflows"
- "Can AI help diagnose medical images?"
- "I want a custom chatbot for my website"

**Don't be shy - ask me anything!** I'm here to help, not to sell. 🚀

What's on your mind?"#;

/// Reply variants for one script rule
enum Reply {
    /// Fixed multi-line template
    Fixed(&'static str),
    /// One of the greeting variants, chosen uniformly at random
    Greeting,
}

struct Rule {
    pattern: Regex,
    reply: Reply,
}

/// Ordered keyword-table dispatch for delegate outages
pub struct FallbackScript {
    rules: Vec<Rule>,
}

impl FallbackScript {
    pub fn new() -> Self {
        Self {
            rules: Self::build_rules(),
        }
    }

    fn build_rules() -> Vec<Rule> {
        let rule = |pattern: &str, reply: Reply| Rule {
            pattern: Regex::new(pattern).unwrap(),
            reply,
        };

        vec![
            rule(
                r"^(hi|hello|hey|yo|sup|greetings|good morning|good afternoon|good evening)",
                Reply::Greeting,
            ),
            rule(r"thank|thanks|appreciate|grateful", Reply::Fixed(GRATITUDE)),
            rule(
                r"who are you|what are you|your name|introduce yourself",
                Reply::Fixed(IDENTITY),
            ),
            rule(
                r"price|pricing|cost|budget|how much|expensive|cheap|afford",
                Reply::Fixed(PRICING),
            ),
            rule(
                r"service|what can you|what do you|capabilities|offer|expertise|specialization",
                Reply::Fixed(SERVICES),
            ),
            rule(
                r"machine learning|deep learning|neural network|model|training|ai model|tensorflow|pytorch",
                Reply::Fixed(MACHINE_LEARNING),
            ),
            rule(
                r"python|full stack|fullstack|web development|backend|frontend|api",
                Reply::Fixed(FULL_STACK),
            ),
            rule(
                r"health|medical|hospital|doctor|patient|clinic|diagnosis|healthcare",
                Reply::Fixed(HEALTHCARE),
            ),
            rule(
                r"farm|agricult|crop|cattle|livestock|rural|irrigation|soil",
                Reply::Fixed(AGRICULTURE),
            ),
            rule(
                r"ecommerce|e-commerce|shop|store|retail|business|sales|inventory|product",
                Reply::Fixed(ECOMMERCE),
            ),
            rule(
                r"educat|student|learning|school|course|teach|tutor|university|college",
                Reply::Fixed(EDUCATION),
            ),
            rule(
                r"contact|email|phone|whatsapp|call|reach|connect|talk to vicky",
                Reply::Fixed(CONTACT),
            ),
            rule(
                r"time|how long|duration|deadline|fast|quick|urgent|when|delivery",
                Reply::Fixed(TIMELINE),
            ),
            rule(
                r"tech stack|technology|tools|framework|library|language|software",
                Reply::Fixed(TECH_STACK),
            ),
            rule(
                r"why you|why vicky|why choose|advantage|better than|different from|special",
                Reply::Fixed(WHY_US),
            ),
            rule(
                r"nlp|natural language|text analysis|sentiment|chatbot|language model|gpt|llm",
                Reply::Fixed(NLP),
            ),
            rule(
                r"computer vision|image recognition|object detection|video analysis|opencv|yolo|detection",
                Reply::Fixed(COMPUTER_VISION),
            ),
            rule(
                r"deploy|deployment|devops|ci/cd|docker|kubernetes|cloud|aws|azure|server|hosting",
                Reply::Fixed(DEPLOYMENT),
            ),
            rule(
                r"discord|webhook|notification|alert|integration",
                Reply::Fixed(INTEGRATIONS),
            ),
        ]
    }

    /// First matching rule's reply, or the generic menu
    pub fn reply(&self, message: &str) -> String {
        let lower = message.to_lowercase();
        for rule in &self.rules {
            if rule.pattern.is_match(&lower) {
                return match &rule.reply {
                    Reply::Fixed(text) => (*text).to_string(),
                    Reply::Greeting => {
                        let mut rng = rand::thread_rng();
                        GREETINGS
                            .choose(&mut rng)
                            .copied()
                            .unwrap_or(GREETINGS[0])
                            .to_string()
                    }
                };
            }
        }
        DEFAULT_MENU.to_string()
    }
}

impl Default for FallbackScript {
    fn default() -> Self {
        Self::new()
    }
}
