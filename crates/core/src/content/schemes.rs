//! Welfare scheme catalog: schemes, channels, documents, helplines.

use super::LocalizedText;

pub const SCHEMES: LocalizedText = LocalizedText::new(SCHEMES_EN, SCHEMES_HI, SCHEMES_TE);

const SCHEMES_EN: &str = r#"GOVERNMENT SCHEMES - Complete Information:

╔══════════════════════════════════════╗
║   MAJOR CENTRAL GOVERNMENT SCHEMES   ║
╚══════════════════════════════════════╝

1. Pradhan Mantri Awas Yojana (PMAY):
   Objective: Housing for All
   Benefit: Up to ₹2.67 lakh subsidy
   Eligibility: EWS/LIG families, no pucca house
   Documents: Aadhaar, income proof, bank account
   Apply: pmaymis.gov.in

2. Ayushman Bharat (PM-JAY):
   Objective: Free health insurance
   Benefit: Up to ₹5 lakh free treatment
   Eligibility: Poor and deprived families
   Apply: pmjay.gov.in, CSC centers
   Helpline: 14555

3. Pradhan Mantri Ujjwala Yojana:
   Benefit: Free LPG connection
   Eligibility: BPL family women
   Documents: Ration card, Aadhaar, photo
   Benefit: First cylinder with subsidy

4. PM-KISAN (Kisan Samman Nidhi):
   Benefit: ₹6,000/year (three installments)
   Eligibility: All farmer families
   Apply: pmkisan.gov.in
   Bank account required (for DBT)

5. Old Age Pension Scheme:
   Benefit: ₹200-1,000/month (state-wise)
   Eligibility: 60+ years, BPL family
   Apply: District Social Welfare Office

6. Mudra Loan Scheme:
   Benefit: Up to ₹10 lakh loan (no collateral)
   Shishu: Up to ₹50,000
   Kishor: ₹50,000 - 5 lakh
   Tarun: ₹5-10 lakh
   Apply: Banks/NBFCs

7. Scholarship Schemes:
   - Pre-Matric: Class 9-10
   - Post-Matric: Class 11 onwards
   - Merit-based scholarships
   Apply: scholarships.gov.in

╔═══════════════════════════════════╗
║   HOW TO APPLY - STEP BY STEP     ║
╚═══════════════════════════════════╝

Online Application:
1. Visit scheme's official website
2. Click "Apply Online" or "New Registration"
3. Fill personal details
4. Upload required documents
5. Submit application and download receipt

Offline Application:
1. Visit nearest Jan Seva Kendra (CSC)
2. Take required documents
3. Get form filled by assistant
4. Submit form and take receipt

Required Documents (General):
✓ Aadhaar Card (mandatory)
✓ Bank account passbook
✓ Income certificate
✓ Caste certificate (if applicable)
✓ Residence proof
✓ Passport size photo
✓ Mobile number

╔════════════════════════════════╗
║   IMPORTANT HELPLINE NUMBERS    ║
╚════════════════════════════════╝

- PM-JAY: 14555
- PM-KISAN: 155261, 011-24300606
- PMAY: 1800-11-6163
- Ujjwala: 1906
- General Grievance: pgportal.gov.in

╔═══════════════════════════════╗
║   USEFUL WEBSITES             ║
╚═══════════════════════════════╝

- All Schemes: india.gov.in
- Scholarships: scholarships.gov.in
- Complaints: pgportal.gov.in
- Digital India: digitalindia.gov.in

Note: Beware of fake websites!
Trust only .gov.in or .nic.in websites."#;

const SCHEMES_HI: &str = r#"सरकारी योजनाएं - संपूर्ण जानकारी:

╔══════════════════════════════════════╗
║   प्रमुख केंद्रीय सरकारी योजनाएं    ║
╚══════════════════════════════════════╝

1. प्रधानमंत्री आवास योजना (PMAY):
   उद्देश्य: सभी को आवास
   लाभ: ₹2.67 लाख तक सब्सिडी
   पात्रता: EWS/LIG परिवार, कोई पक्का मकान नहीं
   दस्तावेज: आधार, आय प्रमाण, बैंक खाता
   आवेदन: pmaymis.gov.in

2. आयुष्मान भारत (PM-JAY):
   उद्देश्य: निःशुल्क स्वास्थ्य बीमा
   लाभ: ₹5 लाख तक का इलाज मुफ्त
   पात्रता: गरीब और वंचित परिवार
   आवेदन: pmjay.gov.in, CSC केंद्र
   हेल्पलाइन: 14555

3. प्रधानमंत्री उज्ज्वला योजना:
   लाभ: मुफ्त LPG कनेक्शन
   पात्रता: BPL परिवार की महिलाएं
   दस्तावेज: राशन कार्ड, आधार, फोटो
   लाभ: पहला सिलिंडर सब्सिडी के साथ

4. प्रधानमंत्री किसान सम्मान निधि (PM-KISAN):
   लाभ: ₹6,000/वर्ष (तीन किस्तें)
   पात्रता: सभी किसान परिवार
   आवेदन: pmkisan.gov.in
   बैंक खाता आवश्यक (DBT के लिए)

5. वृद्धावस्था पेंशन योजना:
   लाभ: ₹200-1,000/माह (राज्य के अनुसार)
   पात्रता: 60+ वर्ष, BPL परिवार
   आवेदन: जिला समाज कल्याण कार्यालय

6. मुद्रा लोन योजना:
   लाभ: ₹10 लाख तक ऋण (बिना गारंटी)
   शिशु: ₹50,000 तक
   किशोर: ₹50,000 - 5 लाख
   तरुण: ₹5-10 लाख
   आवेदन: बैंक/NBFC

7. छात्रवृत्ति योजनाएं:
   - Pre-Matric: कक्षा 9-10
   - Post-Matric: कक्षा 11 से ऊपर
   - मेरिट आधारित छात्रवृत्ति
   आवेदन: scholarships.gov.in

╔═══════════════════════════════════╗
║   आवेदन कैसे करें - चरण-दर-चरण  ║
╚═══════════════════════════════════╝

ऑनलाइन आवेदन:
1. योजना की आधिकारिक वेबसाइट पर जाएं
2. "Apply Online" या "New Registration" पर क्लिक करें
3. व्यक्तिगत विवरण भरें
4. आवश्यक दस्तावेज अपलोड करें
5. आवेदन जमा करें और रसीद डाउनलोड करें

ऑफलाइन आवेदन:
1. नजदीकी जन सेवा केंद्र (CSC) पर जाएं
2. आवश्यक दस्तावेज ले जाएं
3. सहायक से फॉर्म भरवाएं
4. फॉर्म जमा करें और रसीद लें

आवश्यक दस्तावेज (सामान्य):
✓ आधार कार्ड (अनिवार्य)
✓ बैंक खाता पासबुक
✓ आय प्रमाण पत्र
✓ जाति प्रमाण पत्र (यदि लागू हो)
✓ निवास प्रमाण पत्र
✓ पासपोर्ट साइज फोटो
✓ मोबाइल नंबर

╔════════════════════════════════╗
║   महत्वपूर्ण हेल्पलाइन नंबर    ║
╚════════════════════════════════╝

- PM-JAY: 14555
- PM-KISAN: 155261, 011-24300606
- PMAY: 1800-11-6163
- उज्ज्वला: 1906
- सामान्य शिकायत: pgportal.gov.in

╔═══════════════════════════════╗
║   उपयोगी वेबसाइट            ║
╚═══════════════════════════════╝

- सभी योजनाएं: india.gov.in
- छात्रवृत्ति: scholarships.gov.in
- शिकायत: pgportal.gov.in
- डिजिटल इंडिया: digitalindia.gov.in

नोट: नकली वेबसाइट से सावधान रहें!
केवल .gov.in या .nic.in वेबसाइट पर विश्वास करें।"#;

const SCHEMES_TE: &str = r#"ప్రభుత్వ పథకాలు - సంపూర్ణ సమాచారం:

╔══════════════════════════════════════╗
║   ప్రధాన కేంద్ర ప్రభుత్వ పథకాలు      ║
╚══════════════════════════════════════╝

1. ప్రధాన మంత్రి గృహ పథకం (PMAY):
   లక్ష్యం: అందరికీ గృహం
   లాభం: ₹2.67 లక్షల వరకు సబ్సిడీ
   అర్హత: EWS/LIG కుటుంబాలు, పక్కా ఇల్లు లేదు
   పత్రాలు: ఆధార్, ఆదాయ ధ్రువపత్రం, బ్యాంక్ ఖాతా
   దరఖాస్తు: pmaymis.gov.in

2. ఆయుష్మాన్ భారత్ (PM-JAY):
   లక్ష్యం: ఉచిత ఆరోగ్య బీమా
   లాభం: ₹5 లక్షల వరకు చికిత్స ఉచితం
   అర్హత: పేద మరియు వెనుకబడిన కుటుంబాలు
   దరఖాస్తు: pmjay.gov.in, CSC కేంద్రం
   హెల్ప్‌లైన్: 14555

3. ప్రధాన మంత్రి ఉజ్జ్వల పథకం:
   లాభం: ఉచిత LPG కనెక్షన్
   అర్హత: BPL కుటుంబ మహిళలు
   పత్రాలు: రేషన్ కార్డ్, ఆధార్, ఫోటో
   లాభం: మొదటి సిలిండర్ సబ్సిడీతో

4. PM-KISAN (రైతు సన్మాన్ నిధి):
   లాభం: ₹6,000/సంవత్సరం (మూడు విడతలు)
   అర్హత: అన్ని రైతు కుటుంబాలు
   దరఖాస్తు: pmkisan.gov.in
   బ్యాంక్ ఖాతా అవసరం (DBT కోసం)

5. వృద్ధాప్య పెన్షన్ పథకం:
   లాభం: ₹200-1,000/నెల (రాష్ట్ర ప్రకారం)
   అర్హత: 60+ సంవత్సరాలు, BPL కుటుంబం
   దరఖాస్తు: జిల్లా సమాజ సంక్షేమ కార్యాలయం

6. ముద్ర రుణ పథకం:
   లాభం: ₹10 లక్షల వరకు రుణం (హామీ లేకుండా)
   శిశు: ₹50,000 వరకు
   కిశోర్: ₹50,000 - 5 లక్షలు
   తరుణ్: ₹5-10 లక్షలు
   దరఖాస్తు: బ్యాంక్/NBFC

7. స్కాలర్‌షిప్ పథకాలు:
   - Pre-Matric: 9-10 తరగతులు
   - Post-Matric: 11 తరగతి పైన
   - మెరిట్ ఆధారిత స్కాలర్‌షిప్‌లు
   దరఖాస్తు: scholarships.gov.in

╔═══════════════════════════════════╗
║   ఎలా దరఖాస్తు చేసుకోవాలి?      ║
╚═══════════════════════════════════╝

ఆన్‌లైన్ దరఖాస్తు:
1. పథకం అధికారిక వెబ్‌సైట్‌కు వెళ్లండి
2. "Apply Online" లేదా "New Registration" క్లిక్ చేయండి
3. వ్యక్తిగత వివరాలు పూరించండి
4. అవసరమైన పత్రాలు అప్‌లోడ్ చేయండి
5. దరఖాస్తు సమర్పించి రసీదు డౌన్‌లోడ్ చేయండి

ఆఫ్‌లైన్ దరఖాస్తు:
1. సమీప జన సేవా కేంద్రం (CSC)కి వెళ్లండి
2. అవసరమైన పత్రాలు తీసుకెళ్లండి
3. సహాయకునితో ఫారమ్ పూరించండి
4. ఫారమ్ సమర్పించి రసీదు తీసుకోండి

అవసరమైన పత్రాలు (సాధారణ):
✓ ఆధార్ కార్డ్ (తప్పనిసరి)
✓ బ్యాంక్ ఖాతా పాస్‌బుక్
✓ ఆదాయ ధ్రువపత్రం
✓ కుల ధ్రువపత్రం (వర్తించినట్లయితే)
✓ నివాస ధ్రువపత్రం
✓ పాస్‌పోర్ట్ సైజ్ ఫోటో
✓ మొబైల్ నంబర్

╔════════════════════════════════╗
║   ముఖ్యమైన హెల్ప్‌లైన్ నంబర్లు  ║
╚════════════════════════════════╝

- PM-JAY: 14555
- PM-KISAN: 155261, 011-24300606
- PMAY: 1800-11-6163
- ఉజ్జ్వల: 1906
- సాధారణ ఫిర్యాదు: pgportal.gov.in

╔═══════════════════════════════╗
║   ఉపయోగకరమైన వెబ్‌సైట్‌లు     ║
╚═══════════════════════════════╝

- అన్ని పథకాలు: india.gov.in
- స్కాలర్‌షిప్‌లు: scholarships.gov.in
- ఫిర్యాదు: pgportal.gov.in
- డిజిటల్ ఇండియా: digitalindia.gov.in

గమనిక: నకిలీ వెబ్‌సైట్‌ల నుండి జాగ్రత్త!
.gov.in లేదా .nic.in వెబ్‌సైట్‌లను మాత్రమే నమ్మండి।"#;
