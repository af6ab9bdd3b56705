//! Welcome and help text returned for `Intent::General`.

use super::LocalizedText;

pub const WELCOME: LocalizedText = LocalizedText::new(WELCOME_EN, WELCOME_HI, WELCOME_TE);

const WELCOME_EN: &str = r#"Hello! I am Saarthi AI - Your Health & Welfare Assistant.

How can I help you:

🏥 Health Advice:
   - Fever, cold, cough treatment
   - Stomach pain, diarrhea, vomiting care
   - Injury and burn first aid
   - General health guidance
   - Emergency numbers and assistance

📋 Government Schemes:
   - Housing scheme (PM Awas)
   - Health insurance (Ayushman Bharat)
   - Gas connection (Ujjwala)
   - Pension schemes
   - Farmer schemes
   - Scholarship programs
   - Application process and documents

🌤️ Climate Safety:
   - Heat/heatwave protection
   - Flood safety measures
   - Storm and cyclone warnings
   - Disaster management
   - Weather updates

Just ask your question, I'll help you!

Emergency Numbers:
- Ambulance: 102, 108
- Police: 100
- Fire: 101
- Disaster: 1070"#;

const WELCOME_HI: &str = r#"नमस्ते! मैं साथी AI हूं - आपका स्वास्थ्य और कल्याण सहायक।

मैं आपकी कैसे मदद कर सकता हूं:

🏥 स्वास्थ्य सलाह:
   - बुखार, सर्दी, खांसी का इलाज
   - पेट दर्द, दस्त, उल्टी की देखभाल
   - चोट और जलने का प्राथमिक उपचार
   - सामान्य स्वास्थ्य मार्गदर्शन
   - आपातकालीन नंबर और सहायता

📋 सरकारी योजनाएं:
   - आवास योजना (PM Awas)
   - स्वास्थ्य बीमा (Ayushman Bharat)
   - गैस कनेक्शन (Ujjwala)
   - पेंशन योजनाएं
   - किसान योजनाएं
   - छात्रवृत्ति कार्यक्रम
   - आवेदन प्रक्रिया और दस्तावेज

🌤️ जलवायु सुरक्षा:
   - गर्मी/लू से बचाव
   - बाढ़ सुरक्षा उपाय
   - तूफान और आंधी की चेतावनी
   - आपदा प्रबंधन
   - मौसम अपडेट

बस अपना सवाल बोलें, मैं आपकी मदद करूंगा!

आपातकालीन नंबर:
- एम्बुलेंस: 102, 108
- पुलिस: 100
- आग: 101
- आपदा: 1070"#;

const WELCOME_TE: &str = r#"నమస్కారం! నేను సార్థి AI - మీ ఆరోగ్యం మరియు సంక్షేమ సహాయకుడు।

నేను మీకు ఎలా సహాయం చేయగలను:

🏥 ఆరోగ్య సలహా:
   - జ్వరం, జలుబు, దగ్గు చికిత్స
   - కడుపు నొప్పి, విరేచనాలు, వాంతుల సంరక్షణ
   - గాయం మరియు కాలిన గాయాలకు ప్రాథమిక చికిత్స
   - సాధారణ ఆరోగ్య మార్గదర్శకత్వం
   - అత్యవసర నంబర్లు మరియు సహాయం

📋 ప్రభుత్వ పథకాలు:
   - గృహ పథకం (PM Awas)
   - ఆరోగ్య బీమా (Ayushman Bharat)
   - గ్యాస్ కనెక్షన్ (Ujjwala)
   - పెన్షన్ పథకాలు
   - రైతు పథకాలు
   - స్కాలర్‌షిప్ కార్యక్రమాలు
   - దరఖాస్తు ప్రక్రియ మరియు పత్రాలు

🌤️ వాతావరణ భద్రత:
   - వేడి/హీట్‌వేవ్ నుండి రక్షణ
   - వరద భద్రత చర్యలు
   - తుఫాను మరియు తుఫాను హెచ్చరిక
   - విపత్తు నిర్వహణ
   - వాతావరణ నవీకరణలు

మీ ప్రశ్న చెప్పండి, నేను మీకు సహాయం చేస్తాను!

అత్యవసర నంబర్లు:
- అంబులెన్స్: 102, 108
- పోలీసు: 100
- అగ్నిమాపక: 101
- విపత్తు: 1070"#;
