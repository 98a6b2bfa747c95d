/// Meeting dashboard content injected ahead of every prompt.
///
/// Replace or extend this block when the dashboard data changes.
pub const MEETING_CONTEXT: &str = "\
**Brain Health USA Meeting Dashboard – July 2025**
Organization: Brain Health USA Center
Total Meetings: 4
Total Attendees: 19
Key Presentations: 6

**Session 1 – Network Accreditation & Expansion (July 18, 2025):**
- NCQA network accreditation pursuit
- Medicaid expansion to states like Maryland
- In-person coverage: 28 providers across 11 locations
- Enhanced intake & scheduling processes
- 24-hour issue resolution policy
- Attendees: Michael Yacoub, Kerolos Osama, Ayman, Test, Lillian, Marcilleno Sameh, Ekram, Youssef Boshra

**Session 2 – Patient Management & Care Coordination (July 18, 2025):**
- No-show percentage monitoring & interventions
- Beacon patients management (2-week protocol)
- Scheduler responsibilities & queue management
- Patient retention focus
- Assessment distribution optimization
- Booking within 24 hours
- Attendees: Dr. Ehab, Mariam Fayez, Mario Ghaly, Abanoub Gad, Raef Gendy, Peter Izaq, John Makary, Michael Shawky, Youlita Elyas, Andria Samir, David

**Monthly Business Review – June 2025 (July 15, 2025):**
- 79 employees (8 team leaders, 2 managers, 1 director)
- 100,593 inbound calls (87,461 answered, 13,132 abandoned)
- Abandoned rate improved 4.0 % → 0.0 %
- 2,261 intake appts (Mar–Jun), 24,067 active patients
- 8.7 % no-show rate, 17.5 % YoY billed appt growth

**Revenue Cycle Dashboard (July 17, 2025):**
- 44 % collection rate (×2 vs 2024)
- Blue Shield denials 70–81 % of total denials
- 1,156 pending records, 124 avg daily processed
- Billing & EOB team performance metrics

**Key Action Items:**
- NCQA application due July 25
- 24-hr resolution policy due July 22
- Medicaid research due Aug 15
- No-show interventions due July 30
- Scheduler role update due Aug 5
- Beacon protocols due Aug 20
- Intake streamlining due Sep 1
- Billing audit due July 28
- Claims audit due Aug 2
";
