//! Climate and disaster safety blocks.
//!
//! The Hindi and Telugu blocks are shorter than the English guides; every
//! sub-topic still has text authored in all three languages.

use super::LocalizedText;

pub const HEATWAVE: LocalizedText = LocalizedText::new(HEATWAVE_EN, HEATWAVE_HI, HEATWAVE_TE);

pub const FLOOD: LocalizedText = LocalizedText::new(FLOOD_EN, FLOOD_HI, FLOOD_TE);

/// Served when neither heatwave nor flood terms are present.
pub const GENERAL_WEATHER: LocalizedText =
    LocalizedText::new(GENERAL_WEATHER_EN, GENERAL_WEATHER_HI, GENERAL_WEATHER_TE);

const HEATWAVE_EN: &str = r#"HEATWAVE SAFETY - Complete Protection Guide:

Understanding Heat Emergencies:
- Heat Cramps: Muscle pain, heavy sweating
- Heat Exhaustion: Weakness, nausea, headache
- Heat Stroke: EMERGENCY - confusion, no sweating, fever 104°F+

Immediate Protection:
1. Stay indoors 11 AM - 4 PM
2. Drink water every 30 minutes (8-10 glasses/day)
3. Wear light, loose, cotton clothes (white/light colors)
4. Use hat, umbrella, sunglasses when outside
5. Avoid alcohol, caffeine, heavy meals

For Heat Cramps:
- Stop activity immediately
- Drink ORS or lemon water with salt
- Massage cramped muscles gently
- Rest in cool place

For Heat Exhaustion:
- Move to cool, shaded area
- Remove excess clothing
- Pour cool water, use wet cloth
- Drink ORS slowly
- Seek medical help if not improving

For Heat Stroke (EMERGENCY):
- Call 102/108 immediately
- Move to cool place
- Remove clothes
- Pour cool water all over body
- Fan the person
- Give water if conscious
- DO NOT give medicine

Who is at High Risk:
- Infants and children under 5
- Elderly (65+ years)
- Outdoor workers
- Pregnant women
- Chronic disease patients

Prevention Tips:
- Drink water before feeling thirsty
- Eat hydrating fruits (watermelon, cucumber)
- Take cool showers multiple times
- Keep curtains closed during day
- Use coolers/fans properly
- Never leave children/pets in vehicles

Emergency Numbers:
- Ambulance: 102, 108
- State Disaster Helpline: 1070
- Health Emergency: 104

Warning Signs to Watch:
- Severe headache
- Dizziness or fainting
- Rapid heartbeat
- Dry skin (not sweating)
- Confusion or irritability"#;

const HEATWAVE_HI: &str = r#"गर्मी/लू से बचाव:
1. दोपहर 12-3 बजे बाहर न निकलें
2. ढीले, हल्के रंग के कपड़े पहनें
3. खूब पानी पिएं
4. ओआरएस घोल लें
5. टोपी या छाता उपयोग करें
6. लू लगने पर तुरंत ठंडी जगह पर ले जाएं
7. शरीर पर ठंडा पानी डालें
8. आपातकाल में 108 डायल करें"#;

const HEATWAVE_TE: &str = r#"వేడి/హీట్‌వేవ్ నుండి రక్షణ:
1. మధ్యాహ్నం 12-3 గంటల మధ్య బయటకు వెళ్లవద్దు
2. వదులుగా, లేత రంగు దుస్తులు ధరించండి
3. చాలా నీరు త్రాగండి
4. ORS ద్రావణం తాగండి
5. టోపీ లేదా గొడుగు ఉపయోగించండి
6. హీట్ స్ట్రోక్ వచ్చినప్పుడు వెంటనే చల్లని ప్రదేశానికి తీసుకెళ్లండి
7. శరీరంపై చల్లని నీరు పోయండి
8. అత్యవసర పరిస్థితులలో 108 డయల్ చేయండి"#;

const FLOOD_EN: &str = r#"FLOOD SAFETY - Emergency Survival Guide:

BEFORE FLOOD:
Preparation:
1. Keep emergency kit ready (torch, battery, first-aid)
2. Store drinking water (at least 3 days supply)
3. Keep important documents in waterproof bag
4. Know evacuation routes and shelter locations
5. Keep mobile charged, power bank ready
6. Stock dry food items (biscuits, dry fruits)

During Heavy Rain:
7. Monitor weather alerts (TV/Radio/Mobile)
8. Avoid going to low-lying areas
9. Stay away from drainage areas
10. Don't drive through waterlogged roads

DURING FLOOD:
If At Home:
1. Move to highest floor/terrace immediately
2. Turn off electricity and gas
3. Don't touch electrical equipment with wet hands
4. Keep mobile phone charged
5. Signal for help (bright clothes, torch)
6. Don't go near windows

If Outside:
7. Move to higher ground immediately
8. Never walk through moving water (6 inches can knock you down)
9. Avoid flooded roads and bridges
10. Stay away from electric poles and wires
11. Don't try to swim - stay afloat

Car Safety:
- Abandon car if water rising
- Don't drive through flooded areas
- Even 1 foot water can float car
- Electric cars: exit immediately

AFTER FLOOD:
Recovery:
1. Return home only when authorities say safe
2. Check for structural damage before entering
3. Take photos for insurance claims
4. Throw away contaminated food/water
5. Clean and disinfect everything
6. Watch for snakes/insects

Health Precautions:
- Boil water before drinking
- Wash hands frequently
- Watch for skin infections
- Get tetanus shot if injured
- Seek medical help for diarrhea/fever

What NOT to Do:
✗ Don't drink flood water
✗ Don't touch electrical wires
✗ Don't go sightseeing in flooded areas
✗ Don't ignore evacuation orders
✗ Don't spread rumors

Emergency Numbers:
- Disaster Management: 1070
- Police: 100
- Ambulance: 102, 108
- Fire: 101
- NDRF: 011-24363260

Relief & Assistance:
- Move to designated relief camps
- Register with authorities
- Get ration and medical help
- Apply for compensation online"#;

const FLOOD_HI: &str = r#"बाढ़ से सुरक्षा:
1. ऊंची जगह पर जाएं
2. बिजली के उपकरणों को छुएं नहीं
3. बाढ़ के पानी में न चलें
4. आपातकालीन किट तैयार रखें
5. स्थानीय अधिकारियों के निर्देशों का पालन करें
6. महत्वपूर्ण दस्तावेज सुरक्षित रखें
7. राहत शिविर का पता लगाएं"#;

const FLOOD_TE: &str = r#"వరద నుండి భద్రత:
1. ఎత్తైన ప్రదేశానికి వెళ్లండి
2. విద్యుత్ పరికరాలను ముట్టుకోవద్దు
3. వరద నీటిలో నడవకండి
4. అత్యవసర కిట్ సిద్ధంగా ఉంచండి
5. స్థానిక అధికారుల సూచనలను పాటించండి
6. ముఖ్యమైన పత్రాలను సురక్షితంగా ఉంచండి
7. సహాయ శిబిరాన్ని గుర్తించండి"#;

const GENERAL_WEATHER_EN: &str = r#"WEATHER EMERGENCY SAFETY - Complete Guide:

╔══════════════════════════════════╗
║   COMMON WEATHER EMERGENCIES     ║
╚══════════════════════════════════╝

1. CYCLONE/STORM:
   Before: Secure loose items, stock supplies
   During: Stay indoors, away from windows
   After: Check for damage, avoid damaged buildings

2. LIGHTNING:
   - Seek shelter in building/car
   - Avoid trees, metal objects, water
   - If in open: crouch low, feet together
   - If indoors: avoid phones, plumbing

3. EARTHQUAKE:
   During: DROP, COVER, HOLD ON
   - Get under strong table/desk
   - Stay away from windows, shelves
   - If outside: move to open area
   After: Check for injuries, gas leaks

4. DROUGHT:
   - Conserve water strictly
   - Fix leaks immediately
   - Reuse water when possible
   - Grow drought-resistant crops

5. AIR POLLUTION:
   - Stay indoors when AQI high
   - Use air purifiers/masks
   - Avoid morning walks during smog
   - Keep indoor plants

╔════════════════════════════════╗
║   EMERGENCY PREPAREDNESS KIT   ║
╚════════════════════════════════╝

Must Have Items:
✓ Drinking water (3-day supply)
✓ Non-perishable food
✓ First aid kit & medicines
✓ Flashlight & batteries
✓ Radio (battery/hand-crank)
✓ Mobile & power bank
✓ Whistle for signaling
✓ Local maps
✓ Cash in small denominations
✓ Important documents (copies)
✓ Warm clothes/blankets
✓ Toiletries & sanitizer

╔════════════════════════════════╗
║   EMERGENCY CONTACT NUMBERS    ║
╚════════════════════════════════╝

National Emergency Numbers:
- Police: 100
- Fire: 101
- Ambulance: 102, 108
- Disaster Management: 1070
- Women Helpline: 181
- Child Helpline: 1098
- Senior Citizen: 14567
- NDRF: 011-24363260

State Disaster Helplines:
Check your state government website
for specific helpline numbers.

╔════════════════════════════════╗
║   WEATHER ALERTS & TRACKING    ║
╚════════════════════════════════╝

Official Sources:
- IMD: mausam.imd.gov.in
- NDMA: ndma.gov.in
- State Disaster Management websites
- Mobile Apps: Mausam, UMANG

Alert Levels:
🟢 Green: No warning
🟡 Yellow: Be aware
🟠 Orange: Be prepared
🔴 Red: Take action

╔════════════════════════════════╗
║   FAMILY EMERGENCY PLAN        ║
╚════════════════════════════════╝

Prepare Now:
1. Identify safe spots in home
2. Know evacuation routes
3. Decide meeting points
4. Keep emergency contacts handy
5. Practice emergency drills
6. Teach children what to do

Communication Plan:
- Designate out-of-state contact
- Keep written emergency contacts
- Know where children's schools are
- Have backup communication method

Remember: Stay Calm, Stay Safe, Stay Informed!"#;

const GENERAL_WEATHER_HI: &str = r#"मौसम आपातकाल सुरक्षा:
1. मौसम पूर्वानुमान सुनें
2. आपातकालीन संपर्क नंबर सहेजें
3. आपातकालीन किट तैयार रखें
4. परिवार के सदस्यों के साथ योजना बनाएं
5. स्थानीय अधिकारियों के निर्देशों का पालन करें"#;

const GENERAL_WEATHER_TE: &str = r#"వాతావరణ అత్యవసర భద్రత:
1. వాతావరణ సూచనలు వినండి
2. అత్యవసర సంప్రదింపు నంబర్లు సేవ్ చేయండి
3. అత్యవసర కిట్ సిద్ధంగా ఉంచండి
4. కుటుంబ సభ్యులతో ప్రణాళిక చేసుకోండి
5. స్థానిక అధికారుల సూచనలను పాటించండి"#;
