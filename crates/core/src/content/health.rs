//! Health and first-aid guidance blocks.

use super::LocalizedText;

pub const FEVER: LocalizedText = LocalizedText::new(FEVER_EN, FEVER_HI, FEVER_TE);

pub const COLD_COUGH: LocalizedText =
    LocalizedText::new(COLD_COUGH_EN, COLD_COUGH_HI, COLD_COUGH_TE);

pub const STOMACH: LocalizedText = LocalizedText::new(STOMACH_EN, STOMACH_HI, STOMACH_TE);

/// Served when no health sub-topic matches.
pub const GENERAL_HEALTH: LocalizedText =
    LocalizedText::new(GENERAL_HEALTH_EN, GENERAL_HEALTH_HI, GENERAL_HEALTH_TE);

const FEVER_EN: &str = r#"FEVER - Comprehensive First Aid Guide:

Immediate Action:
1. Measure temperature (Normal: 98.6°F / 37°C)
2. Make patient rest completely
3. Keep room cool and well-ventilated
4. Wear light, cotton clothing

Treatment Method:
5. Apply cold water compress on forehead
6. Give sponge bath every 2-3 hours
7. Plenty of fluids - water, coconut water, ORS
8. Paracetamol 500mg (adults - consult doctor)
9. No heavy meals, give light digestible food

Danger Signs - Go to Hospital Immediately:
- Fever above 103°F (39.4°C)
- Fever lasting more than 3 days
- Severe headache or vomiting
- Loss of consciousness or confusion
- Difficulty breathing
- Any fever in infants (immediate doctor visit)

Prevention:
- Maintain hygiene
- Avoid crowded places
- Eat nutritious food and drink water

Emergency Numbers: 102 (Ambulance), 104 (Helpline)"#;

const FEVER_HI: &str = r#"बुखार - विस्तृत प्राथमिक उपचार गाइड:

तत्काल कार्रवाई:
1. तापमान मापें (सामान्य: 98.6°F / 37°C)
2. रोगी को पूरी तरह आराम दें
3. कमरे को ठंडा और हवादार रखें
4. हल्के, सूती कपड़े पहनाएं

उपचार विधि:
5. ठंडे पानी की पट्टी माथे पर रखें
6. हर 2-3 घंटे में स्पंज बाथ दें  
7. बहुत सारे तरल पदार्थ - पानी, नारियल पानी, ORS
8. पेरासिटामोल 500mg (वयस्क - डॉक्टर से पूछें)
9. भारी भोजन न दें, हल्का सुपाच्य भोजन दें

खतरे के संकेत - तुरंत अस्पताल जाएं:
- 103°F (39.4°C) से ऊपर बुखार
- 3 दिन से ज्यादा बुखार
- गंभीर सिरदर्द या उल्टी
- बेहोशी या भ्रम की स्थिति
- सांस लेने में कठिनाई
- शिशुओं में कोई भी बुखार (तुरंत डॉक्टर)

रोकथाम:
- स्वच्छता बनाए रखें
- भीड़भाड़ वाली जगहों से बचें
- पौष्टिक भोजन और पानी पिएं

आपातकालीन नंबर: 102 (एम्बुलेंस), 104 (हेल्पलाइन)"#;

const FEVER_TE: &str = r#"జ్వరం - సమగ్ర ప్రాథమిక చికిత్స మార్గదర్శి:

తక్షణ చర్య:
1. ఉష్ణోగ్రత కొలవండి (సాధారణ: 98.6°F / 37°C)
2. రోగికి పూర్తి విశ్రాంతి ఇవ్వండి
3. గదిని చల్లగా మరియు గాలితో ఉంచండి
4. తేలికపాటి, పత్తి బట్టలు ధరించండి

చికిత్స పద్ధతి:
5. చల్లని నీటి వట్టిని నుదుటిపై ఉంచండి
6. ప్రతి 2-3 గంటలకు స్పాంజ్ స్నానం చేయించండి
7. చాలా ద్రవాలు - నీరు, కొబ్బరి నీరు, ORS
8. పారాసిటమాల్ 500mg (పెద్దలకు - వైద్యుడిని అడగండి)
9. భారీ ఆహారం ఇవ్వకండి, తేలికపాటి జీర్ణమయ్యే ఆహారం ఇవ్వండి

ప్రమాద సంకేతాలు - వెంటనే ఆసుపత్రికి వెళ్లండి:
- 103°F (39.4°C) కంటే ఎక్కువ జ్వరం
- 3 రోజుల కంటే ఎక్కువ జ్వరం
- తీవ్రమైన తలనొప్పి లేదా వాంతులు
- స్పృహ కోల్పోవడం లేదా గందరగోళం
- శ్వాస తీసుకోవడంలో ఇబ్బంది
- శిశువులకు ఏదైనా జ్వరం (వెంటనే వైద్యుడు)

నివారణ:
- పరిశుభ్రతను కొనసాగించండి
- రద్దీ ఉన్న ప్రదేశాలను నివారించండి
- పోషకాహారం మరియు నీరు తాగండి

అత్యవసర నంబర్లు: 102 (అంబులెన్స్), 104 (హెల్ప్‌లైన్)"#;

const COLD_COUGH_EN: &str = r#"COLD & COUGH - Complete Treatment Guide:

Symptoms & Types:
- Dry Cough: No mucus production
- Wet Cough: With phlegm/mucus  
- Common Cold: Runny nose, sneezing, mild fever
- Flu: High fever, body aches, fatigue

Home Treatment:
1. Rest at least 7-8 hours daily
2. Drink warm water, herbal tea, honey-lemon water
3. Steam inhalation 2-3 times daily
4. Gargle with warm salt water (3-4 times/day)
5. Honey + ginger juice (1 tsp 3 times/day)
6. Keep body warm, avoid cold exposure

Medications (After Doctor Consultation):
- Cough syrup for dry cough
- Antihistamines for runny nose
- Paracetamol for fever/body ache

When to See Doctor:
- Cough lasting more than 2 weeks
- Blood in cough/phlegm
- Chest pain or breathing difficulty
- High fever (above 102°F)
- Symptoms getting worse

Prevention:
- Wash hands frequently
- Avoid contact with sick people
- Keep body warm in cold weather
- Boost immunity with vitamin C foods
- Stay hydrated always

Emergency: 102, 104"#;

const COLD_COUGH_HI: &str = r#"सर्दी और खांसी - संपूर्ण उपचार गाइड:

लक्षण और प्रकार:
- सूखी खांसी: बलगम नहीं
- गीली खांसी: बलगम के साथ
- सामान्य सर्दी: नाक बहना, छींक, हल्का बुखार
- फ्लू: तेज बुखार, शरीर दर्द, थकान

घरेलू उपचार:
1. कम से कम 7-8 घंटे आराम करें
2. गर्म पानी, हर्बल चाय, शहद-नींबू पानी पिएं
3. दिन में 2-3 बार भाप लें
4. गर्म नमक के पानी से गरारे करें (दिन में 3-4 बार)
5. शहद + अदरक का रस (1 चम्मच दिन में 3 बार)
6. शरीर को गर्म रखें, ठंड से बचें

दवाएं (डॉक्टर की सलाह के बाद):
- सूखी खांसी के लिए कफ सिरप
- नाक बहने के लिए एंटीहिस्टामाइन
- बुखार/शरीर दर्द के लिए पेरासिटामोल

डॉक्टर कब दिखाएं:
- 2 सप्ताह से अधिक खांसी
- खांसी/बलगम में खून
- सीने में दर्द या सांस लेने में कठिनाई
- तेज बुखार (102°F से ऊपर)
- लक्षण बिगड़ रहे हों

रोकथाम:
- बार-बार हाथ धोएं
- बीमार लोगों से दूर रहें
- ठंड में शरीर गर्म रखें
- विटामिन सी वाले खाद्य पदार्थ खाएं
- हमेशा पानी पीते रहें

आपातकालीन: 102, 104"#;

const COLD_COUGH_TE: &str = r#"జలుబు మరియు దగ్గు - సంపూర్ణ చికిత్స మార్గదర్శి:

లక్షణాలు మరియు రకాలు:
- పొడి దగ్గు: కఫం లేదు
- తడి దగ్గు: కఫంతో
- సాధారణ జలుబు: ముక్కు కారడం, తుమ్ములు, తక్కువ జ్వరం
- ఫ్లూ: అధిక జ్వరం, శరీర నొప్పులు, అలసట

ఇంటి చికిత్స:
1. కనీసం 7-8 గంటలు విశ్రాంతి తీసుకోండి
2. వేడి నీరు, మూలికా టీ, తేనె-నిమ్మ నీరు త్రాగండి
3. రోజుకు 2-3 సార్లు ఆవిరి పీల్చండి
4. వేడి ఉప్పు నీటితో గార్గిల్ చేయండి (రోజుకు 3-4 సార్లు)
5. తేనె + అల్లం రసం (1 టీస్పూన్ రోజుకు 3 సార్లు)
6. శరీరాన్ని వెచ్చగా ఉంచండి, చలిని నివారించండి

మందులు (వైద్యుడి సలహా తర్వాత):
- పొడి దగ్గు కోసం కఫ్ సిరప్
- ముక్కు కారడం కోసం యాంటిహిస్టామైన్లు
- జ్వరం/శరీర నొప్పి కోసం పారాసిటమాల్

వైద్యుడిని ఎప్పుడు చూడాలి:
- 2 వారాల కంటే ఎక్కువ దగ్గు
- దగ్గు/కఫంలో రక్తం
- ఛాతీ నొప్పి లేదా శ్వాస తీసుకోవడంలో ఇబ్బంది
- అధిక జ్వరం (102°F కంటే ఎక్కువ)
- లక్షణాలు తీవ్రమవుతున్నాయి

నివారణ:
- తరచుగా చేతులు కడుక్కోండి
- అనారోగ్యంతో ఉన్న వ్యక్తులకు దూరంగా ఉండండి
- చలిలో శరీరాన్ని వెచ్చగా ఉంచండి
- విటమిన్ సి ఆహారాలు తినండి
- ఎల్లప్పుడూ హైడ్రేటెడ్ గా ఉండండి

అత్యవసరం: 102, 104"#;

const STOMACH_EN: &str = r#"STOMACH PROBLEMS - Treatment Guide:

Common Issues:
1. Diarrhea (Loose motions)
2. Vomiting
3. Food Poisoning
4. Acidity/Heartburn
5. Constipation

For Diarrhea:
- ORS (Oral Rehydration Solution) - Most Important!
- Rice water, coconut water, buttermilk
- BRAT diet: Bananas, Rice, Applesauce, Toast
- Avoid oily, spicy foods
- Probiotics (curd/yogurt)
- Zinc supplements for children

For Vomiting:
- Stop eating for 2-3 hours
- Sip water slowly (small amounts)
- Ginger tea or lemon water
- Rest in comfortable position
- Avoid strong smells

For Food Poisoning:
- Plenty of fluids (water, ORS)
- Complete rest
- Light foods after 6-8 hours
- Monitor for severe symptoms

Danger Signs - See Doctor:
- Blood in stool or vomit
- Severe dehydration (dry mouth, no urination)
- High fever with stomach pain
- Diarrhea lasting more than 3 days
- Unable to keep fluids down

Prevention:
- Drink clean/boiled water
- Wash hands before eating
- Eat freshly cooked food
- Proper food storage
- Good kitchen hygiene

Emergency: 102 (Ambulance)"#;

const STOMACH_HI: &str = r#"पेट की समस्याएं - उपचार गाइड:

सामान्य समस्याएं:
1. दस्त (लूज मोशन)
2. उल्टी
3. फूड पॉइजनिंग
4. एसिडिटी/सीने में जलन
5. कब्ज

दस्त के लिए:
- ORS (ओरल रिहाइड्रेशन सॉल्यूशन) - सबसे जरूरी!
- चावल का पानी, नारियल पानी, छाछ
- BRAT आहार: केला, चावल, सेब की चटनी, टोस्ट
- तैलीय, मसालेदार भोजन से बचें
- प्रोबायोटिक्स (दही)
- बच्चों के लिए जिंक सप्लीमेंट

उल्टी के लिए:
- 2-3 घंटे तक कुछ न खाएं
- धीरे-धीरे पानी पिएं (थोड़ी मात्रा में)
- अदरक की चाय या नींबू पानी
- आरामदायक स्थिति में आराम करें
- तेज गंध से बचें

फूड पॉइजनिंग के लिए:
- भरपूर तरल पदार्थ (पानी, ORS)
- पूर्ण आराम
- 6-8 घंटे बाद हल्का भोजन
- गंभीर लक्षणों की निगरानी करें

खतरे के संकेत - डॉक्टर को दिखाएं:
- मल या उल्टी में खून
- गंभीर डीहाइड्रेशन (सूखा मुंह, पेशाब नहीं)
- पेट दर्द के साथ तेज बुखार
- 3 दिन से अधिक दस्त
- तरल पदार्थ पीने में असमर्थ

रोकथाम:
- साफ/उबला पानी पिएं
- खाने से पहले हाथ धोएं
- ताजा पका हुआ खाना खाएं
- भोजन का उचित भंडारण
- रसोई की अच्छी स्वच्छता

आपातकालीन: 102 (एम्बुलेंस)"#;

const STOMACH_TE: &str = r#"కడుపు సమస్యలు - చికిత్స మార్గదర్శి:

సాధారణ సమస్యలు:
1. విరేచనాలు (లూజ్ మోషన్స్)
2. వాంతులు
3. ఫుడ్ పాయిజనింగ్
4. యాసిడిటీ/గుండె మంట
5. మలబద్ధకం

విరేచనాల కోసం:
- ORS (ఓరల్ రీహైడ్రేషన్ సొల్యూషన్) - చాలా ముఖ్యం!
- బియ్యం నీరు, కొబ్బరి నీరు, మజ్జిగ
- BRAT ఆహారం: అరటిపండ్లు, బియ్యం, ఆపిల్ సాస్, టోస్ట్
- నూనె, మసాలా ఆహారం నివారించండి
- ప్రోబయోటిక్స్ (పెరుగు)
- పిల్లలకు జింక్ సప్లిమెంట్లు

వాంతుల కోసం:
- 2-3 గంటల పాటు ఏమీ తినవద్దు
- నీటిని నెమ్మదిగా తాగండి (చిన్న మొత్తాలు)
- అల్లం టీ లేదా నిమ్మ నీరు
- సౌకర్యవంతమైన స్థితిలో విశ్రాంతి తీసుకోండి
- బలమైన వాసనలను నివారించండి

ఫుడ్ పాయిజనింగ్ కోసం:
- పుష్కలంగా ద్రవాలు (నీరు, ORS)
- పూర్తి విశ్రాంతి
- 6-8 గంటల తర్వాత తేలికపాటి ఆహారం
- తీవ్ర లక్షణాలను పర్యవేక్షించండి

ప్రమాద సంకేతాలు - వైద్యుడిని చూడండి:
- మలం లేదా వాంతిలో రక్తం
- తీవ్ర నిర్జలీకరణం (పొడి నోరు, మూత్రవిసర్జన లేదు)
- కడుపు నొప్పితో అధిక జ్వరం
- 3 రోజుల కంటే ఎక్కువ విరేచనాలు
- ద్రవాలు తాగలేకపోవడం

నివారణ:
- శుభ్రమైన/ఉడికించిన నీరు త్రాగండి
- తినడానికి ముందు చేతులు కడుక్కోండి
- తాజాగా వండిన ఆహారం తినండి
- సరైన ఆహార నిల్వ
- మంచి వంటగది పరిశుభ్రత

అత్యవసరం: 102 (అంబులెన్స్)"#;

const GENERAL_HEALTH_EN: &str = r#"GENERAL HEALTH GUIDANCE:

First Aid Kit Essentials:
- Bandages, cotton, gauze
- Antiseptic cream (Betadine)
- Paracetamol, antacids
- ORS powder
- Thermometer
- Clean water

Common Symptoms & Treatment:
1. Headache: Rest, drink water, paracetamol
2. Dizziness: Lie down, elevate legs
3. Minor cuts: Clean, apply antiseptic
4. Minor burns: Cold water for 10 minutes
5. Nosebleed: Lean forward, pinch nose

When to See Doctor:
- Severe pain or unbearable symptoms
- Breathing difficulty
- Loss of consciousness or confusion
- Serious injury or bleeding
- Any serious symptoms in children/elderly

Emergency Numbers:
- Ambulance: 102, 108
- Health Helpline: 104
- Women Helpline: 181
- Child Helpline: 1098

For Healthy Life:
- Balanced diet, plenty of water
- Regular exercise (30 min/day)
- Adequate sleep (7-8 hours)
- Stress management, meditation/yoga
- Regular health checkups"#;

const GENERAL_HEALTH_HI: &str = r#"सामान्य स्वास्थ्य मार्गदर्शन:

प्राथमिक उपचार किट में रखें:
- बैंडेज, कॉटन, गॉज
- एंटीसेप्टिक क्रीम (बेटाडाइन)
- पेरासिटामोल, एंटासिड
- ओआरएस पाउडर
- थर्मामीटर
- साफ पानी

सामान्य लक्षण और उपचार:
1. सिरदर्द: आराम, पानी पिएं, पेरासिटामोल
2. चक्कर: लेट जाएं, पैर ऊपर करें
3. छोटी चोट: साफ करें, एंटीसेप्टिक लगाएं
4. मामूली जलना: ठंडे पानी में 10 मिनट रखें
5. नकसीर: आगे झुकें, नाक दबाएं

डॉक्टर कब दिखाएं:
- गंभीर दर्द या असहनीय लक्षण
- सांस लेने में परेशानी
- बेहोशी या भ्रम
- गंभीर चोट या रक्तस्राव
- बच्चों/बुजुर्गों में कोई भी गंभीर लक्षण

आपातकालीन नंबर:
- एम्बुलेंस: 102, 108
- स्वास्थ्य हेल्पलाइन: 104
- महिला हेल्पलाइन: 181
- बाल हेल्पलाइन: 1098

स्वस्थ जीवन के लिए:
- संतुलित आहार, भरपूर पानी
- नियमित व्यायाम (30 मिनट/दिन)
- पर्याप्त नींद (7-8 घंटे)
- तनाव प्रबंधन, ध्यान/योग
- नियमित स्वास्थ्य जांच"#;

const GENERAL_HEALTH_TE: &str = r#"సాధారణ ఆరోగ్య మార్గదర్శకత్వం:

ప్రాథమిక చికిత్స కిట్‌లో ఉంచండి:
- బ్యాండేజ్, పత్తి, గాజ్
- క్రిమినాశక క్రీమ్ (బెటాడిన్)
- పారాసిటమాల్, యాంటాసిడ్
- ORS పొడి
- థర్మామీటర్
- శుభ్రమైన నీరు

సాధారణ లక్షణాలు మరియు చికిత్స:
1. తలనొప్పి: విశ్రాంతి, నీరు త్రాగండి, పారాసిటమాల్
2. తల తిరగడం: పడుకోండి, కాళ్లు పైకి
3. చిన్న గాయం: శుభ్రం చేయండి, క్రిమినాశక రాయండి
4. చిన్న కాలుడు: చల్లని నీటిలో 10 నిమిషాలు
5. ముక్కు నుండి రక్తం: ముందుకు వాలండి, ముక్కు నొక్కండి

వైద్యుడిని ఎప్పుడు చూడాలి:
- తీవ్రమైన నొప్పి లేదా అసహ్యకరమైన లక్షణాలు
- శ్వాస తీసుకోవడంలో ఇబ్బంది
- స్పృహ కోల్పోవడం లేదా గందరగోళం
- తీవ్రమైన గాయం లేదా రక్తస్రావం
- పిల్లలు/వృద్ధులలో ఏదైనా తీవ్ర లక్షణం

అత్యవసర నంబర్లు:
- అంబులెన్స్: 102, 108
- ఆరోగ్య హెల్ప్‌లైన్: 104
- మహిళా హెల్ప్‌లైన్: 181
- పిల్లల హెల్ప్‌లైన్: 1098

ఆరోగ్యకరమైన జీవితం కోసం:
- సమతుల్య ఆహారం, పుష్కలంగా నీరు
- క్రమం తప్పకుండా వ్యాయామం (30 నిమిషాలు/రోజు)
- తగినంత నిద్ర (7-8 గంటలు)
- ఒత్తిడి నిర్వహణ, ధ్యానం/యోగా
- క్రమం తప్పకుండా ఆరోగ్య పరీక్షలు"#;
